//! Word lists for the game
//!
//! Provides the root word pool and the lookup dictionary, both compiled
//! into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
