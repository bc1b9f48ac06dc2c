//! Game rules: submission validation and scoring

mod score;
mod validator;

pub use score::score_for;
pub use validator::{Accepted, Rejection, WordValidator};
