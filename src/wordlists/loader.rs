//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded
//! constants, plus random root selection for starting a round.

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Fallback root when the pool yields nothing usable
pub const DEFAULT_ROOT: &str = "silkworm";

/// Load words from a newline-separated file
///
/// Entries are trimmed and lower-cased; empty lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to an owned word pool
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_lowercase()).collect()
}

/// Pick a random root word from the pool
///
/// Falls back to [`DEFAULT_ROOT`] when the pool is empty or the chosen
/// entry does not form a valid root word.
pub fn random_root<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Word {
    pool.choose(rng)
        .and_then(|choice| Word::new(choice).ok())
        .unwrap_or_else(|| Word::new(DEFAULT_ROOT).expect("default root word is valid"))
}
