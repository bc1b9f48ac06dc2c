//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure and testable.

mod word;

pub use word::{Word, WordError, normalize};
