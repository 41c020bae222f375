//! The anagram-plus-one tower rule
//!
//! A word can be stacked on top of another when it reuses every letter of the
//! word below (in any order) and adds exactly one new letter.

use super::letters::LetterCounts;
use serde::Serialize;
use std::fmt;

/// Why a candidate cannot be built on a base word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildRejection {
    /// Candidate is not exactly one letter longer than the base
    WrongLength { expected: usize, actual: usize },
    /// Candidate drops letters of the base
    MissingBaseLetters { base: String, missing: Vec<char> },
    /// Candidate adds zero or several letters
    WrongAddedCount { added: usize },
}

impl fmt::Display for BuildRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, .. } => {
                write!(f, "Word must be exactly {expected} letters long")
            }
            Self::MissingBaseLetters { base, .. } => {
                write!(f, "Must use all letters from '{base}'")
            }
            Self::WrongAddedCount { .. } => write!(f, "Must add exactly one new letter"),
        }
    }
}

impl std::error::Error for BuildRejection {}

/// Check whether `candidate` can be stacked on `base`
///
/// Returns the added letter on success.
///
/// # Errors
///
/// Returns the first failed condition, checked in order: length, base letters
/// reused, exactly one letter added.
///
/// # Examples
/// ```
/// use word_tower::core::{can_build, BuildRejection};
///
/// assert_eq!(can_build("art", "tart"), Ok('t'));
/// assert_eq!(can_build("tart", "start"), Ok('s'));
/// assert!(matches!(can_build("art", "art"), Err(BuildRejection::WrongLength { .. })));
/// ```
pub fn can_build(base: &str, candidate: &str) -> Result<char, BuildRejection> {
    let base = base.to_lowercase();
    let candidate = candidate.to_lowercase();

    let expected = base.chars().count() + 1;
    let actual = candidate.chars().count();
    if actual != expected {
        return Err(BuildRejection::WrongLength { expected, actual });
    }

    let base_counts = LetterCounts::of(&base);
    let candidate_counts = LetterCounts::of(&candidate);

    let missing = base_counts.missing_from(&candidate_counts);
    if !missing.is_empty() {
        return Err(BuildRejection::MissingBaseLetters { base, missing });
    }

    match candidate_counts.surplus_over(&base_counts).as_slice() {
        [letter] => Ok(*letter),
        added => Err(BuildRejection::WrongAddedCount { added: added.len() }),
    }
}

/// The single letter that was inserted to turn `base` into `candidate`
///
/// `None` whenever [`can_build`] would reject the pair.
#[must_use]
pub fn added_letter(base: &str, candidate: &str) -> Option<char> {
    can_build(base, candidate).ok()
}

/// Message shown when a word is accepted, e.g. `"Added letter: T"`
#[must_use]
pub fn build_message(letter: char) -> String {
    format!("Added letter: {}", letter.to_ascii_uppercase())
}
