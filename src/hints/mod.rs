//! Hint generation
//!
//! Finds the legal next words for a tower and describes one of them in the
//! requested [`HintKind`]. Hints are read-only: the tower is never touched.

mod styles;

pub use styles::{
    ContainsHint, DefinitionHint, FirstLetterHint, HintContext, HintKind, HintStyle, LengthHint,
    PatternHint, SmartHint,
};

use crate::core::{Word, can_build};
use crate::lexicon::Lexicon;
use crate::oracle::WordOracle;
use rand::RngCore;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;

/// Candidates ranked by frequency when an oracle is available
const FREQUENCY_SAMPLE: usize = 20;
/// The hint word is drawn from this many most frequent candidates
const FREQUENCY_TOP: usize = 5;

/// A rendered hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub text: String,
    pub style: &'static str,
    /// Number of legal next words
    pub candidate_count: usize,
    pub target_length: usize,
}

/// Result of asking for a hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HintOutcome {
    /// At least one word can be built
    Hint(Hint),
    /// The tower cannot grow any further
    NoMovesAvailable {
        height: usize,
        final_word: String,
        message: String,
    },
}

impl HintOutcome {
    #[must_use]
    pub const fn is_hint(&self) -> bool {
        matches!(self, Self::Hint(_))
    }
}

/// Enumerates next words and renders hints
pub struct HintEngine<'a> {
    lexicon: &'a Lexicon,
    oracle: Option<&'a dyn WordOracle>,
}

impl<'a> HintEngine<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, oracle: Option<&'a dyn WordOracle>) -> Self {
        Self { lexicon, oracle }
    }

    /// Every known word that can be stacked on the tower's top word
    ///
    /// Words already in the tower are excluded.
    ///
    /// # Examples
    /// ```
    /// use word_tower::core::Word;
    /// use word_tower::hints::HintEngine;
    /// use word_tower::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["art", "tart", "rats", "start"]).unwrap();
    /// let hints = HintEngine::new(&lexicon, None);
    /// let tower = [Word::new("art").unwrap()];
    ///
    /// let mut next: Vec<String> = hints.candidates(&tower).iter().map(|w| w.to_string()).collect();
    /// next.sort();
    /// assert_eq!(next, ["rats", "tart"]);
    /// ```
    #[must_use]
    pub fn candidates(&self, tower: &[Word]) -> Vec<Word> {
        let Some(current) = tower.last() else {
            return Vec::new();
        };

        let mut candidates = self
            .lexicon
            .filter_words_of_length(current.len() + 1, |w| can_build(current.text(), w).is_ok());
        candidates.retain(|w| !tower.contains(w));
        candidates
    }

    /// Produce a hint for the next word of `tower`
    pub fn hint(&self, tower: &[Word], kind: &HintKind, rng: &mut dyn RngCore) -> HintOutcome {
        let candidates = self.candidates(tower);
        let height = tower.len();

        let Some(candidate) = self.pick(&candidates, rng) else {
            let final_word = tower.last().map(Word::to_string).unwrap_or_default();
            return HintOutcome::NoMovesAvailable {
                message: no_moves_message(height, &final_word, rng),
                height,
                final_word,
            };
        };

        let target_length = candidate.len();
        let ctx = HintContext {
            candidate: &candidate,
            height,
            target_length,
            oracle: self.oracle,
        };

        HintOutcome::Hint(Hint {
            text: kind.render(&ctx, rng),
            style: kind.name(),
            candidate_count: candidates.len(),
            target_length,
        })
    }

    /// Choose the word to hint at
    ///
    /// With an oracle, a sample of candidates is ranked by frequency and the
    /// choice is made among the most common ones.
    fn pick(&self, candidates: &[Word], rng: &mut dyn RngCore) -> Option<Word> {
        match self.oracle {
            Some(oracle) if candidates.len() > 1 => {
                let mut sample = candidates.to_vec();
                sample.shuffle(rng);
                sample.truncate(FREQUENCY_SAMPLE);

                let mut ranked: Vec<(Word, f64)> = sample
                    .into_iter()
                    .map(|w| {
                        let frequency = oracle.frequency(w.text());
                        (w, frequency)
                    })
                    .collect();
                ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
                ranked.truncate(FREQUENCY_TOP);

                ranked.choose(rng).map(|(w, _)| w.clone())
            }
            _ => candidates.choose(rng).cloned(),
        }
    }
}

fn no_moves_message(height: usize, final_word: &str, rng: &mut dyn RngCore) -> String {
    let upper = final_word.to_uppercase();
    let messages = [
        format!("Incredible! You've reached the maximum height of {height} words!"),
        format!("Amazing job! No more words can be built from '{upper}'."),
        format!("Outstanding! Your tower of {height} words is complete, no further words possible!"),
    ];
    messages
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| format!("No more words can be built from '{upper}'."))
}
