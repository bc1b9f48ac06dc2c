//! Word Scramble
//!
//! A single-screen anagram game: spell real words from the letters of a
//! random root word. Longer words score more points.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::Word;
//! use word_scramble::dictionary::Dictionary;
//! use word_scramble::game::WordValidator;
//!
//! let root = Word::new("listen").unwrap();
//! let dictionary = Dictionary::from_words(["silent", "line"]);
//! let mut session = WordValidator::new(root, dictionary);
//!
//! let accepted = session.submit("silent").unwrap();
//! assert_eq!(accepted.score_delta, 20); // full anagram
//! ```

// Core domain types
pub mod core;

// Submission rules and scoring
pub mod game;

// Real-word lookup capability
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
