//! Scoring for accepted words
//!
//! Longer words are worth more, scaled against the root word's length.

/// Points awarded for an accepted word of `length` letters against a root
/// word of `root_length` letters
///
/// - full anagram of the root: 20
/// - one letter short of the root: 10
/// - at least four letters: 5
/// - anything else (only three-letter words can land here, since the
///   availability check caps candidates at the root's length): 3
#[must_use]
pub fn score_for(length: usize, root_length: usize) -> u32 {
    if length == root_length {
        20
    } else if length + 1 == root_length {
        10
    } else if (4..root_length).contains(&length) {
        5
    } else {
        3
    }
}
