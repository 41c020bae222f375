//! Score command
//!
//! Scores an arbitrary tower given on the command line.

use crate::core::{Word, can_build};
use crate::scoring::{ScoreBreakdown, ScoreRules};
use anyhow::{Result, bail};

/// Parse a tower, checking every step against the rule
///
/// # Errors
///
/// Returns an error if a word is malformed or a level does not follow from
/// the one below it.
pub fn parse_tower<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>> {
    let tower = words
        .iter()
        .map(|w| Word::new(w.as_ref()).map_err(|e| anyhow::anyhow!("'{}': {e}", w.as_ref())))
        .collect::<Result<Vec<Word>>>()?;

    if tower.is_empty() {
        bail!("A tower needs at least one word");
    }

    for pair in tower.windows(2) {
        if let Err(reason) = can_build(pair[0].text(), pair[1].text()) {
            bail!("'{}' cannot follow '{}': {reason}", pair[1], pair[0]);
        }
    }
    Ok(tower)
}

/// Score a tower
///
/// # Errors
///
/// Returns an error if the tower is not valid (see [`parse_tower`]).
pub fn score_words<S: AsRef<str>>(
    words: &[S],
    elapsed_seconds: Option<u64>,
    rules: &ScoreRules,
) -> Result<ScoreBreakdown> {
    let tower = parse_tower(words)?;
    Ok(rules.score_tower(&tower, elapsed_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_a_valid_tower() {
        let score = score_words(&["art", "tart", "start"], None, &ScoreRules::default()).unwrap();
        assert_eq!(score.total_score, 26);
        assert_eq!(score.height, 3);
    }

    #[test]
    fn speed_bonus_from_seconds() {
        let score =
            score_words(&["art", "tart", "start"], Some(120), &ScoreRules::default()).unwrap();
        assert_eq!(score.total_score, 28);
    }

    #[test]
    fn rejects_broken_towers() {
        let err = parse_tower(&["art", "start"]).unwrap_err();
        assert!(err.to_string().contains("cannot follow"));
        assert!(parse_tower::<&str>(&[]).is_err());
        assert!(parse_tower(&["art", "t4rt"]).is_err());
    }
}
