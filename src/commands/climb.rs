//! Climb command
//!
//! Finds the tallest tower reachable from a starting word.

use crate::core::Word;
use crate::explorer::TowerExplorer;
use crate::lexicon::Lexicon;
use crate::scoring::{ScoreBreakdown, ScoreRules};
use anyhow::Result;
use std::time::{Duration, Instant};

/// Tallest tower from one word
pub struct ClimbResult {
    pub tower: Vec<Word>,
    pub score: ScoreBreakdown,
    pub duration: Duration,
}

/// Search the lexicon for the tallest tower starting at `start`
///
/// # Errors
///
/// Returns an error if `start` is not a well-formed word.
pub fn climb(lexicon: &Lexicon, start: &str, rules: &ScoreRules) -> Result<ClimbResult> {
    let start_word = Word::new(start).map_err(|e| anyhow::anyhow!("Invalid word '{start}': {e}"))?;
    let began = Instant::now();

    let explorer = TowerExplorer::new(lexicon);
    let tower = explorer.tallest_from(&start_word);
    let score = rules.score_tower(&tower, None);

    Ok(ClimbResult {
        tower,
        score,
        duration: began.elapsed(),
    })
}
