//! One player's game
//!
//! A [`GameSession`] owns its tower and is the only thing that mutates it.
//! Every mutation is validated first (lexicon, then tower membership, then the
//! build rule) so a rejected word leaves the session untouched.

use crate::core::{Word, can_build};
use crate::error::{GameError, GameResult};
use crate::hints::{HintEngine, HintKind, HintOutcome};
use crate::lexicon::Lexicon;
use crate::oracle::WordOracle;
use crate::scoring::{ScoreBreakdown, ScoreRules};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Active,
    Ended,
}

/// A word was stacked on the tower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordAdded {
    pub word: Word,
    pub added_letter: char,
    pub height: usize,
}

/// The top word was taken off the tower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRemoved {
    pub removed: Word,
    pub current_word: Word,
    pub height: usize,
}

/// Snapshot of a session for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub tower: Vec<Word>,
    pub height: usize,
    pub current_word: Word,
    pub starting_word: Word,
    pub hints_used: u32,
    pub is_active: bool,
}

/// Final result of an ended session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub tower: Vec<Word>,
    /// Same as `score.height`, which carries it when serialized
    #[serde(skip)]
    pub height: usize,
    pub starting_word: Word,
    pub elapsed_seconds: u64,
    pub hints_used: u32,
    #[serde(flatten)]
    pub score: ScoreBreakdown,
}

/// A tower being built by one player
pub struct GameSession {
    lexicon: Arc<Lexicon>,
    oracle: Option<Arc<dyn WordOracle>>,
    rules: ScoreRules,
    rng: StdRng,
    starting_word: Word,
    tower: Vec<Word>,
    hints_used: u32,
    started_at: Instant,
    ended_at: Option<Instant>,
}

impl GameSession {
    /// Start a game on `starting_word`
    ///
    /// The session has no oracle, default scoring rules and an OS-seeded RNG
    /// until configured otherwise.
    #[must_use]
    pub fn new(starting_word: Word, lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            oracle: None,
            rules: ScoreRules::default(),
            rng: StdRng::from_os_rng(),
            tower: vec![starting_word.clone()],
            starting_word,
            hints_used: 0,
            started_at: Instant::now(),
            ended_at: None,
        }
    }

    /// Consult `oracle` for words missing from the lexicon
    #[must_use]
    pub fn with_oracle(mut self, oracle: Option<Arc<dyn WordOracle>>) -> Self {
        self.oracle = oracle;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: ScoreRules) -> Self {
        self.rules = rules;
        self
    }

    /// Use a fixed seed for hint selection
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.ended_at.is_some() {
            SessionState::Ended
        } else {
            SessionState::Active
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    #[must_use]
    pub fn tower(&self) -> &[Word] {
        &self.tower
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.tower.len()
    }

    /// Top word of the tower
    #[must_use]
    pub fn current_word(&self) -> &Word {
        self.tower.last().unwrap_or(&self.starting_word)
    }

    #[must_use]
    pub const fn starting_word(&self) -> &Word {
        &self.starting_word
    }

    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Seconds since the game started (or until it ended)
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.ended_at
            .unwrap_or_else(Instant::now)
            .duration_since(self.started_at)
            .as_secs()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameState {
        GameState {
            tower: self.tower.clone(),
            height: self.height(),
            current_word: self.current_word().clone(),
            starting_word: self.starting_word.clone(),
            hints_used: self.hints_used,
            is_active: self.is_active(),
        }
    }

    fn ensure_active(&self) -> GameResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(GameError::GameEnded)
        }
    }

    /// Stack `candidate` on the tower
    ///
    /// # Errors
    ///
    /// [`GameError::GameEnded`] after [`end`](Self::end);
    /// [`GameError::NotAWord`] if neither the lexicon nor the oracle knows it;
    /// [`GameError::AlreadyUsed`] if it is already in the tower;
    /// [`GameError::InvalidBuild`] if it breaks the anagram-plus-one rule.
    pub fn add_word(&mut self, candidate: &str) -> GameResult<WordAdded> {
        self.ensure_active()?;

        let word = Word::new(candidate).map_err(|_| GameError::NotAWord {
            word: candidate.trim().to_lowercase(),
        })?;

        if !self
            .lexicon
            .lookup(&word, self.oracle.as_deref())
            .is_known()
        {
            debug!(word = %word, "Rejected unknown word");
            return Err(GameError::NotAWord {
                word: word.into_string(),
            });
        }

        if self.tower.contains(&word) {
            debug!(word = %word, "Rejected repeated word");
            return Err(GameError::AlreadyUsed {
                word: word.into_string(),
            });
        }

        let added_letter = can_build(self.current_word().text(), word.text()).map_err(|reason| {
            debug!(word = %word, %reason, "Rejected build");
            GameError::InvalidBuild(reason)
        })?;

        self.tower.push(word.clone());
        debug!(word = %word, letter = %added_letter, height = self.height(), "Accepted word");

        Ok(WordAdded {
            word,
            added_letter,
            height: self.height(),
        })
    }

    /// Take the top word off the tower
    ///
    /// # Errors
    ///
    /// [`GameError::GameEnded`] after [`end`](Self::end);
    /// [`GameError::CannotUndoStart`] when only the starting word is left.
    pub fn undo(&mut self) -> GameResult<WordRemoved> {
        self.ensure_active()?;

        if self.tower.len() <= 1 {
            return Err(GameError::CannotUndoStart);
        }
        let removed = self.tower.pop().ok_or(GameError::CannotUndoStart)?;
        debug!(word = %removed, height = self.height(), "Undid word");

        Ok(WordRemoved {
            removed,
            current_word: self.current_word().clone(),
            height: self.height(),
        })
    }

    /// Start over from the starting word
    ///
    /// Valid in any state; clears hints and restarts the clock.
    pub fn reset(&mut self) {
        self.tower.truncate(1);
        self.hints_used = 0;
        self.started_at = Instant::now();
        self.ended_at = None;
        info!(starting_word = %self.starting_word, "Reset game");
    }

    /// Describe a possible next word
    ///
    /// Counts as a hint even when no move is left. The tower is never touched,
    /// so an ended game can still be asked; its summary keeps the count it had
    /// when it ended.
    pub fn hint(&mut self, kind: &HintKind) -> HintOutcome {
        self.hints_used += 1;

        let engine = HintEngine::new(&self.lexicon, self.oracle.as_deref());
        let outcome = engine.hint(&self.tower, kind, &mut self.rng);
        debug!(style = kind.name(), has_moves = outcome.is_hint(), "Gave hint");
        outcome
    }

    /// Finish the game and score it
    ///
    /// # Errors
    ///
    /// [`GameError::GameEnded`] if the game already ended.
    pub fn end(&mut self) -> GameResult<GameSummary> {
        self.ensure_active()?;
        self.ended_at = Some(Instant::now());

        let elapsed_seconds = self.elapsed_seconds();
        let score = self.rules.score_tower(&self.tower, Some(elapsed_seconds));
        info!(
            height = self.height(),
            score = score.total_score,
            elapsed_seconds,
            "Ended game"
        );

        Ok(GameSummary {
            tower: self.tower.clone(),
            height: self.height(),
            starting_word: self.starting_word.clone(),
            elapsed_seconds,
            hints_used: self.hints_used,
            score,
        })
    }
}
