//! Hint command
//!
//! One-off hint for a tower given on the command line.

use super::score::parse_tower;
use crate::hints::{HintEngine, HintKind, HintOutcome};
use crate::lexicon::Lexicon;
use crate::oracle::WordOracle;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Produce a hint for the next word of `words`
///
/// # Errors
///
/// Returns an error if the words do not form a valid tower.
pub fn hint_for<S: AsRef<str>>(
    lexicon: &Lexicon,
    oracle: Option<&dyn WordOracle>,
    words: &[S],
    style: &str,
    seed: Option<u64>,
) -> Result<HintOutcome> {
    let tower = parse_tower(words)?;
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let kind = HintKind::from_name(style);
    Ok(HintEngine::new(lexicon, oracle).hint(&tower, &kind, &mut rng))
}
