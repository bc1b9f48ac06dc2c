//! One-shot word checking command
//!
//! Validates a single candidate against a given root word and reports the
//! verdict without starting an interactive session.

use crate::core::Word;
use crate::dictionary::RealWordChecker;
use crate::game::{Accepted, Rejection, WordValidator};

/// Result of checking one candidate against one root word
pub struct CheckResult {
    pub root: String,
    pub candidate: String,
    pub outcome: Result<Accepted, Rejection>,
}

/// Check a single candidate word against a root word
///
/// # Errors
///
/// Returns an error if the root word itself is invalid (empty or
/// non-alphabetic). A failing candidate is not an error; it shows up as a
/// [`Rejection`] in the result's outcome.
pub fn check_word<C: RealWordChecker>(
    root: &str,
    candidate: &str,
    checker: C,
) -> Result<CheckResult, String> {
    let root_word = Word::new(root).map_err(|e| format!("Invalid root word: {e}"))?;

    let mut validator = WordValidator::new(root_word, checker);
    let outcome = validator.submit(candidate);

    Ok(CheckResult {
        root: validator.root_word().text().to_string(),
        candidate: candidate.trim().to_lowercase(),
        outcome,
    })
}
