//! Submission rules and session state
//!
//! [`WordValidator`] owns the state of one round: the root word, the list
//! of accepted words (most recent first), and the score. Its `submit`
//! operation runs the rule checks in a fixed order and mutates the session
//! only when every rule passes.

use super::score::score_for;
use crate::core::{Word, normalize};
use crate::dictionary::RealWordChecker;
use std::fmt;

/// Why a candidate word was turned down
///
/// The five reasons are mutually exclusive: the first failing rule decides,
/// later rules are not evaluated. All of them are recoverable; the player
/// just tries another word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer than three letters after normalization
    TooShort,
    /// Candidate equals the root word
    SameAsRoot,
    /// Candidate was already accepted this round
    AlreadyUsed,
    /// Candidate needs letters the root word does not have
    NotPossible,
    /// Candidate is not a real dictionary word
    NotReal,
}

impl Rejection {
    /// Short alert title for display
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "I see what you did here!",
            Self::SameAsRoot => "Nice try!",
            Self::AlreadyUsed => "Word used already!",
            Self::NotPossible => "Word not possible!",
            Self::NotReal => "Word not recognized!",
        }
    }

    /// Longer alert message for display
    ///
    /// `root_word` is interpolated into the message where it helps.
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::TooShort => "Your word is too short. Try harder!".to_string(),
            Self::SameAsRoot => {
                "Your word is the same as our root word. Easy points are not allowed!".to_string()
            }
            Self::AlreadyUsed => "Be more original.".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root_word}'."),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl std::error::Error for Rejection {}

/// A successfully submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The normalized word that was added to the used list
    pub word: String,
    /// Points this word added to the score
    pub score_delta: u32,
}

/// Rule engine and session state for one round
///
/// Generic over the injected [`RealWordChecker`] so tests can use a fixed
/// vocabulary instead of the embedded dictionary.
pub struct WordValidator<C> {
    checker: C,
    root_word: Word,
    used_words: Vec<String>,
    score: u32,
}

impl<C: RealWordChecker> WordValidator<C> {
    /// Start a session with the given root word and dictionary capability
    #[must_use]
    pub fn new(root_word: Word, checker: C) -> Self {
        Self {
            checker,
            root_word,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// The root word of the current round
    #[must_use]
    pub fn root_word(&self) -> &Word {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Current round score
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Begin a new round: swap in the root word, clear used words, zero the
    /// score
    pub fn start_round(&mut self, new_root_word: Word) {
        self.root_word = new_root_word;
        self.used_words.clear();
        self.score = 0;
    }

    /// Submit a candidate word
    ///
    /// Runs the rules in order: length, same-as-root, already-used, letter
    /// availability, dictionary lookup. On success the word is inserted at
    /// the front of the used list and the score delta is applied; on
    /// rejection the session is untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] for the first rule the candidate fails.
    pub fn submit(&mut self, candidate: &str) -> Result<Accepted, Rejection> {
        let answer = normalize(candidate);

        if answer.chars().count() < 3 {
            return Err(Rejection::TooShort);
        }

        if answer == self.root_word.text() {
            return Err(Rejection::SameAsRoot);
        }

        if self.used_words.iter().any(|used| *used == answer) {
            return Err(Rejection::AlreadyUsed);
        }

        if !self.root_word.can_spell(&answer) {
            return Err(Rejection::NotPossible);
        }

        if !self.checker.is_real(&answer) {
            return Err(Rejection::NotReal);
        }

        let score_delta = score_for(answer.chars().count(), self.root_word.len());
        self.used_words.insert(0, answer.clone());
        self.score += score_delta;

        Ok(Accepted {
            word: answer,
            score_delta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-vocabulary checker for deterministic tests
    struct FixedVocabulary(&'static [&'static str]);

    impl RealWordChecker for FixedVocabulary {
        fn is_real(&self, word: &str) -> bool {
            self.0.contains(&word)
        }
    }

    fn listen_session() -> WordValidator<FixedVocabulary> {
        let vocabulary = FixedVocabulary(&[
            "silent", "enlist", "tinsel", "inlet", "line", "lint", "nest", "tile", "ten", "tin",
        ]);
        WordValidator::new(Word::new("listen").unwrap(), vocabulary)
    }

    #[test]
    fn short_words_rejected() {
        let mut session = listen_session();
        assert_eq!(session.submit("it"), Err(Rejection::TooShort));
        assert_eq!(session.submit("  i  "), Err(Rejection::TooShort));
        assert_eq!(session.submit(""), Err(Rejection::TooShort));
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn root_word_rejected_any_case() {
        let mut session = listen_session();
        assert_eq!(session.submit("listen"), Err(Rejection::SameAsRoot));
        assert_eq!(session.submit("LISTEN"), Err(Rejection::SameAsRoot));
        assert_eq!(session.submit("  Listen "), Err(Rejection::SameAsRoot));
    }

    #[test]
    fn duplicates_rejected_case_insensitively() {
        let mut session = listen_session();
        assert!(session.submit("silent").is_ok());
        assert_eq!(session.submit("silent"), Err(Rejection::AlreadyUsed));
        assert_eq!(session.submit("SILENT"), Err(Rejection::AlreadyUsed));
        assert_eq!(session.score(), 20);
        assert_eq!(session.used_words().len(), 1);
    }

    #[test]
    fn unavailable_letters_rejected() {
        let mut session = listen_session();
        // 'x' not in "listen"
        assert_eq!(session.submit("next"), Err(Rejection::NotPossible));
        // two 't's requested, root has one
        assert_eq!(session.submit("tint"), Err(Rejection::NotPossible));
    }

    #[test]
    fn letter_multiplicity_enforced() {
        let vocabulary = FixedVocabulary(&["miss", "silks"]);
        let mut session = WordValidator::new(Word::new("silkworm").unwrap(), vocabulary);
        // "miss" needs two 's', "silkworm" has one
        assert_eq!(session.submit("miss"), Err(Rejection::NotPossible));
        assert_eq!(session.submit("silks"), Err(Rejection::NotPossible));
    }

    #[test]
    fn unknown_words_rejected() {
        let mut session = listen_session();
        // spellable from "listen" but not in the vocabulary
        assert_eq!(session.submit("stile"), Err(Rejection::NotReal));
    }

    #[test]
    fn anagram_scores_twenty() {
        let mut session = listen_session();
        let accepted = session.submit("silent").unwrap();
        assert_eq!(accepted.word, "silent");
        assert_eq!(accepted.score_delta, 20);
        assert_eq!(session.score(), 20);
    }

    #[test]
    fn four_letter_word_scores_five() {
        let mut session = listen_session();
        let accepted = session.submit("line").unwrap();
        assert_eq!(accepted.score_delta, 5);
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn one_short_of_root_scores_ten() {
        let mut session = listen_session();
        let accepted = session.submit("inlet").unwrap();
        assert_eq!(accepted.score_delta, 10);
    }

    #[test]
    fn three_letter_word_scores_three() {
        let mut session = listen_session();
        let accepted = session.submit("tin").unwrap();
        assert_eq!(accepted.score_delta, 3);
    }

    #[test]
    fn accepted_words_front_inserted() {
        let mut session = listen_session();
        session.submit("line").unwrap();
        session.submit("lint").unwrap();
        session.submit("nest").unwrap();
        assert_eq!(session.used_words(), ["nest", "lint", "line"]);
    }

    #[test]
    fn submission_normalizes_input() {
        let mut session = listen_session();
        let accepted = session.submit("  LiNe \n").unwrap();
        assert_eq!(accepted.word, "line");
        assert_eq!(session.used_words(), ["line"]);
    }

    #[test]
    fn score_accumulates() {
        let mut session = listen_session();
        session.submit("silent").unwrap(); // 20
        session.submit("inlet").unwrap(); // 10
        session.submit("line").unwrap(); // 5
        session.submit("ten").unwrap(); // 3
        assert_eq!(session.score(), 38);
    }

    #[test]
    fn rejection_leaves_session_untouched() {
        let mut session = listen_session();
        session.submit("line").unwrap();
        let before_words = session.used_words().to_vec();
        let before_score = session.score();

        assert!(session.submit("stile").is_err());
        assert!(session.submit("miss").is_err());

        assert_eq!(session.used_words(), before_words);
        assert_eq!(session.score(), before_score);
    }

    #[test]
    fn start_round_resets_everything() {
        let mut session = listen_session();
        session.submit("silent").unwrap();
        session.submit("line").unwrap();
        assert!(session.score() > 0);

        session.start_round(Word::new("tinsel").unwrap());
        assert_eq!(session.root_word().text(), "tinsel");
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());

        // words from the previous round are submittable again
        assert!(session.submit("line").is_ok());
    }

    #[test]
    fn rule_order_first_failure_wins() {
        let mut session = listen_session();
        // "it" is too short AND not spellable-from-root checks never run
        assert_eq!(session.submit("it"), Err(Rejection::TooShort));
        // "tint" is unspellable AND unknown; availability is checked first
        assert_eq!(session.submit("tint"), Err(Rejection::NotPossible));
    }

    #[test]
    fn rejection_titles_and_messages() {
        assert_eq!(Rejection::AlreadyUsed.title(), "Word used already!");
        assert_eq!(Rejection::AlreadyUsed.message("listen"), "Be more original.");
        assert_eq!(
            Rejection::NotPossible.message("silkworm"),
            "You can't spell that word from 'silkworm'."
        );
        assert_eq!(format!("{}", Rejection::NotReal), "Word not recognized!");
    }
}
