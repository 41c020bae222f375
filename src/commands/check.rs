//! Check command
//!
//! Applies the tower rule to a single pair of words.

use crate::core::{BuildRejection, Word, can_build};
use anyhow::Result;

/// Verdict for one base/candidate pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub base: Word,
    pub candidate: Word,
    /// The added letter, or why the pair is rejected
    pub verdict: Result<char, BuildRejection>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Check whether `candidate` can be stacked on `base`
///
/// Only the rule is applied; neither word has to be in the lexicon.
///
/// # Errors
///
/// Returns an error if either argument is not a well-formed word.
pub fn check_pair(base: &str, candidate: &str) -> Result<CheckResult> {
    let base = Word::new(base).map_err(|e| anyhow::anyhow!("Invalid base word '{base}': {e}"))?;
    let candidate = Word::new(candidate)
        .map_err(|e| anyhow::anyhow!("Invalid candidate '{candidate}': {e}"))?;

    let verdict = can_build(base.text(), candidate.text());
    Ok(CheckResult {
        base,
        candidate,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_pair() {
        let result = check_pair("art", "TART").unwrap();
        assert!(result.is_valid());
        assert_eq!(result.verdict, Ok('t'));
        assert_eq!(result.candidate.text(), "tart");
    }

    #[test]
    fn anagram_plus_one_in_any_order() {
        assert_eq!(check_pair("tart", "start").unwrap().verdict, Ok('s'));
        assert_eq!(check_pair("art", "rats").unwrap().verdict, Ok('s'));
    }

    #[test]
    fn rejected_pair_carries_reason() {
        let result = check_pair("art", "stars").unwrap();
        assert!(matches!(
            result.verdict,
            Err(BuildRejection::WrongLength { expected: 4, actual: 5 })
        ));

        let result = check_pair("art", "tool").unwrap();
        assert!(matches!(
            result.verdict,
            Err(BuildRejection::MissingBaseLetters { .. })
        ));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(check_pair("art", "t4rt").is_err());
        assert!(check_pair("", "tart").is_err());
    }
}
