//! Root word representation
//!
//! A `Word` holds a normalized root word whose letters bound all valid
//! submissions for a round.

use std::fmt;

/// A normalized root word
///
/// Stores the lower-cased, trimmed text. Candidates are checked against the
/// root's letters with multiset semantics: a letter can be used only as many
/// times as it appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters => write!(f, "Word must contain only alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Normalize a raw user string: trim surrounding whitespace, then lower-case
///
/// Deterministic: the same input always yields the same normalized form.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl Word {
    /// Create a new Word from a string, normalizing it first
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text is empty or contains
    /// non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::new("  Silkworm ").unwrap();
    /// assert_eq!(word.text(), "silkworm");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("s1lkworm").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false in practice: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `candidate` can be spelled from this word's letters
    ///
    /// Greedily consumes letters from a working copy of the root: each
    /// candidate letter removes one matching occurrence, so a letter can be
    /// reused only as many times as the root contains it.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let root = Word::new("silkworm").unwrap();
    /// assert!(root.can_spell("silk"));
    /// assert!(root.can_spell("worm"));
    /// assert!(!root.can_spell("miss")); // only one 's' available
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut remaining: Vec<char> = self.text.chars().collect();

        for letter in candidate.chars() {
            if let Some(pos) = remaining.iter().position(|&c| c == letter) {
                remaining.swap_remove(pos);
            } else {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes() {
        let word = Word::new("SILKWORM").unwrap();
        assert_eq!(word.text(), "silkworm");

        let word2 = Word::new("  Listen\n").unwrap();
        assert_eq!(word2.text(), "listen");
    }

    #[test]
    fn word_creation_invalid() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new("   "), Err(WordError::Empty)));
        assert!(matches!(
            Word::new("sil kworm"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("s1lk"),
            Err(WordError::InvalidCharacters)
        ));
    }

    #[test]
    fn normalize_is_deterministic() {
        let inputs = ["  Word  ", "WORD", "word\t"];
        for input in inputs {
            assert_eq!(normalize(input), normalize(input));
        }
        assert_eq!(normalize("  SiLeNt "), "silent");
    }

    #[test]
    fn word_len_counts_letters() {
        assert_eq!(Word::new("silkworm").unwrap().len(), 8);
        assert_eq!(Word::new("ivy").unwrap().len(), 3);
    }

    #[test]
    fn can_spell_subsets() {
        let root = Word::new("silkworm").unwrap();
        assert!(root.can_spell("silk"));
        assert!(root.can_spell("worms"));
        assert!(root.can_spell("slim"));
        assert!(root.can_spell("silkworm"));
    }

    #[test]
    fn can_spell_rejects_missing_letter() {
        let root = Word::new("silkworm").unwrap();
        assert!(!root.can_spell("silent")); // no 'e', 'n', 't'
        assert!(!root.can_spell("x"));
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let root = Word::new("silkworm").unwrap();
        assert!(!root.can_spell("miss")); // needs two 's', root has one

        let speed = Word::new("speed").unwrap();
        assert!(speed.can_spell("see"));
        assert!(!speed.can_spell("seeds")); // needs two 's', root has one
    }

    #[test]
    fn can_spell_empty_candidate() {
        let root = Word::new("silkworm").unwrap();
        assert!(root.can_spell(""));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Listen").unwrap();
        assert_eq!(format!("{word}"), "listen");
    }
}
