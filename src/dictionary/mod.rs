//! Real-word lookup capability
//!
//! The validator does not decide on its own what counts as a real English
//! word; it asks an injected [`RealWordChecker`]. The production
//! implementation is [`Dictionary`], a hash-set lookup over the word list
//! embedded at build time. Tests inject a fixed-vocabulary fake instead.

use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Capability for deciding whether a word is a real dictionary word
///
/// Implementations answer for a single language (English here). The lookup
/// is synchronous and infallible: unknown words simply return `false`.
pub trait RealWordChecker {
    fn is_real(&self, word: &str) -> bool;
}

impl<C: RealWordChecker + ?Sized> RealWordChecker for &C {
    fn is_real(&self, word: &str) -> bool {
        (**self).is_real(word)
    }
}

/// English dictionary backed by a hash set
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from the word list embedded in the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY.iter().copied())
    }

    /// Build a dictionary from an arbitrary word collection
    ///
    /// Entries are lower-cased; empty entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a dictionary from a newline-separated word list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    /// Check if a word exists in the dictionary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl RealWordChecker for Dictionary {
    fn is_real(&self, word: &str) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::from_words(Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(!dict.is_real("test"));
    }

    #[test]
    fn from_words_normalizes_entries() {
        let dict = Dictionary::from_words(["Silent", " LINE ", "", "  "]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("silent"));
        assert!(dict.contains("line"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dict = Dictionary::from_words(["silent"]);
        assert!(dict.is_real("silent"));
        assert!(dict.is_real("SILENT"));
        assert!(dict.is_real("SiLeNt"));
    }

    #[test]
    fn embedded_contains_common_words() {
        let dict = Dictionary::embedded();
        assert!(dict.is_real("silent"));
        assert!(dict.is_real("line"));
        assert!(dict.is_real("worm"));
        assert!(!dict.is_real("zzzz"));
        assert!(!dict.is_real(""));
    }

    #[test]
    fn checker_through_reference() {
        let dict = Dictionary::from_words(["silk"]);
        let by_ref: &dyn RealWordChecker = &dict;
        assert!(by_ref.is_real("silk"));
    }
}
