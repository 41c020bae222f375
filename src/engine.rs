//! The tower engine
//!
//! [`TowerEngine`] is the synchronous API an outer layer (HTTP handlers, the
//! CLI) drives. It owns the shared lexicon, the optional oracle and the
//! session store; every call addresses a session by id and returns plain,
//! serializable values. Rule failures come back as unsuccessful responses;
//! only a missing session or a bad starting word is an `Err`.

use crate::config::EngineConfig;
use crate::core::{Word, build_message};
use crate::error::{EngineError, GameError};
use crate::game::{GameSession, GameState, GameSummary, SessionStore, SharedSession};
use crate::hints::{HintEngine, HintKind, HintOutcome};
use crate::lexicon::{Lexicon, ValidationStats};
use crate::oracle::WordOracle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// Result of [`TowerEngine::add_word`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddWordResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_letter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GameError>,
}

/// Result of [`TowerEngine::undo`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndoResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GameError>,
}

/// Result of [`TowerEngine::hint`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The tower cannot grow any further
    pub no_moves_available: bool,
}

impl From<HintOutcome> for HintResponse {
    fn from(outcome: HintOutcome) -> Self {
        match outcome {
            HintOutcome::Hint(hint) => Self {
                success: true,
                hint_text: Some(hint.text),
                candidate_count: Some(hint.candidate_count),
                message: None,
                no_moves_available: false,
            },
            HintOutcome::NoMovesAvailable { message, .. } => Self {
                success: false,
                hint_text: None,
                candidate_count: Some(0),
                message: Some(message),
                no_moves_available: true,
            },
        }
    }
}

/// Runs tower games for any number of callers
pub struct TowerEngine {
    lexicon: Arc<Lexicon>,
    oracle: Option<Arc<dyn WordOracle>>,
    config: EngineConfig,
    sessions: SessionStore,
    rng: Mutex<StdRng>,
}

impl TowerEngine {
    /// Create an engine without an oracle
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use word_tower::config::EngineConfig;
    /// use word_tower::engine::TowerEngine;
    /// use word_tower::lexicon::Lexicon;
    ///
    /// let lexicon = Arc::new(Lexicon::from_words(["art", "tart", "start"]).unwrap());
    /// let engine = TowerEngine::new(lexicon, EngineConfig::default());
    ///
    /// let id = engine.create_session(Some("art")).unwrap();
    /// assert!(engine.add_word(&id, "tart").unwrap().success);
    /// assert_eq!(engine.get_state(&id).unwrap().height, 2);
    /// ```
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>, config: EngineConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            lexicon,
            oracle: None,
            sessions: SessionStore::new(config.session_idle_timeout),
            config,
            rng: Mutex::new(rng),
        }
    }

    /// Use `oracle` for words the lexicon does not know
    ///
    /// Applies to sessions created afterwards.
    #[must_use]
    pub fn with_oracle(mut self, oracle: Option<Arc<dyn WordOracle>>) -> Self {
        self.oracle = oracle;
        self
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    #[must_use]
    pub fn has_oracle(&self) -> bool {
        self.oracle.is_some()
    }

    /// Lexicon lookup counters
    #[must_use]
    pub fn stats(&self) -> ValidationStats {
        self.lexicon.stats()
    }

    fn starting_word(&self, rng: &mut StdRng) -> Result<Word, EngineError> {
        if let Some(word) = self
            .lexicon
            .random_word_of_length(self.config.starting_word_length, rng)
        {
            return Ok(word);
        }
        let fallback = &self.config.fallback_starting_word;
        Word::new(fallback).map_err(|e| EngineError::InvalidStartingWord {
            word: fallback.clone(),
            reason: e.to_string(),
        })
    }

    /// Start a new game and return its session id
    ///
    /// Without a starting word, one of the configured length is drawn from
    /// the lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStartingWord`] if `starting_word` is not
    /// a well-formed word.
    pub fn create_session(&self, starting_word: Option<&str>) -> Result<String, EngineError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let word = match starting_word {
            Some(text) => Word::new(text).map_err(|e| EngineError::InvalidStartingWord {
                word: text.to_string(),
                reason: e.to_string(),
            })?,
            None => self.starting_word(&mut rng)?,
        };
        let seed: u64 = rng.random();
        drop(rng);

        let session = GameSession::new(word.clone(), Arc::clone(&self.lexicon))
            .with_oracle(self.oracle.clone())
            .with_rules(self.config.scoring.clone())
            .with_seed(seed);
        let id = self.sessions.insert(session);
        info!(session = %id, starting_word = %word, "Created session");
        Ok(id)
    }

    fn session(&self, id: &str) -> Result<SharedSession, EngineError> {
        self.sessions
            .get(id)
            .ok_or_else(|| EngineError::SessionNotFound(id.to_string()))
    }

    fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> T,
    ) -> Result<T, EngineError> {
        let session = self.session(id)?;
        let mut game = session.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut game))
    }

    /// Current tower and counters
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SessionNotFound`] for unknown or expired ids.
    pub fn get_state(&self, id: &str) -> Result<GameState, EngineError> {
        self.with_session(id, |game| game.snapshot())
    }

    /// Try to stack `word` on the tower
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SessionNotFound`] for unknown or expired ids.
    pub fn add_word(&self, id: &str, word: &str) -> Result<AddWordResponse, EngineError> {
        self.with_session(id, |game| match game.add_word(word) {
            Ok(added) => AddWordResponse {
                success: true,
                message: build_message(added.added_letter),
                added_letter: Some(added.added_letter),
                height: Some(added.height),
                error: None,
            },
            Err(error) => AddWordResponse {
                success: false,
                message: error.to_string(),
                added_letter: None,
                height: None,
                error: Some(error),
            },
        })
    }

    /// Remove the top word
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SessionNotFound`] for unknown or expired ids.
    pub fn undo(&self, id: &str) -> Result<UndoResponse, EngineError> {
        self.with_session(id, |game| match game.undo() {
            Ok(removed) => UndoResponse {
                success: true,
                message: format!("Removed '{}'", removed.removed),
                height: Some(removed.height),
                current_word: Some(removed.current_word.into_string()),
                error: None,
            },
            Err(error) => UndoResponse {
                success: false,
                message: error.to_string(),
                height: None,
                current_word: None,
                error: Some(error),
            },
        })
    }

    /// Ask for a hint in the named style
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SessionNotFound`] for unknown or expired ids.
    pub fn hint(&self, id: &str, style: &str) -> Result<HintResponse, EngineError> {
        let kind = HintKind::from_name(style);
        self.with_session(id, |game| HintResponse::from(game.hint(&kind)))
    }

    /// Number of words that could be stacked next
    ///
    /// Unlike [`hint`](Self::hint) this is not counted against the player.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SessionNotFound`] for unknown or expired ids.
    pub fn next_word_count(&self, id: &str) -> Result<usize, EngineError> {
        let hints = HintEngine::new(&self.lexicon, None);
        self.with_session(id, |game| hints.candidates(game.tower()).len())
    }

    /// Start the session over from its starting word
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SessionNotFound`] for unknown or expired ids.
    pub fn reset(&self, id: &str) -> Result<(), EngineError> {
        self.with_session(id, GameSession::reset)
    }

    /// Finish the game and return its score
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SessionNotFound`] for unknown or expired ids,
    /// or [`EngineError::Game`] wrapping [`GameError::GameEnded`] if the game
    /// was already ended.
    pub fn end(&self, id: &str) -> Result<GameSummary, EngineError> {
        self.with_session(id, GameSession::end)?
            .map_err(EngineError::from)
    }

    /// Discard a session
    pub fn close_session(&self, id: &str) -> bool {
        self.sessions.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::testing::FakeOracle;

    fn engine() -> TowerEngine {
        let lexicon = Lexicon::from_words(["art", "cat", "tart", "start", "fox"]).unwrap();
        TowerEngine::new(
            Arc::new(lexicon),
            EngineConfig {
                seed: Some(42),
                ..EngineConfig::default()
            },
        )
    }

    #[test]
    fn random_starting_word_comes_from_lexicon() {
        let engine = engine();
        let id = engine.create_session(None).unwrap();
        let state = engine.get_state(&id).unwrap();
        assert_eq!(state.starting_word.len(), 3);
        assert!(engine.lexicon().is_known(state.starting_word.text()));
        assert_eq!(state.tower, vec![state.starting_word.clone()]);
    }

    #[test]
    fn fallback_word_when_no_word_of_length() {
        let lexicon = Lexicon::from_words(["tart"]).unwrap();
        let engine = TowerEngine::new(Arc::new(lexicon), EngineConfig::default());
        let id = engine.create_session(None).unwrap();
        assert_eq!(engine.get_state(&id).unwrap().starting_word.text(), "cat");
    }

    #[test]
    fn seeded_engines_agree() {
        let a = engine();
        let b = engine();
        let start = |e: &TowerEngine| {
            let id = e.create_session(None).unwrap();
            e.get_state(&id).unwrap().starting_word
        };
        assert_eq!(start(&a), start(&b));
    }

    #[test]
    fn bad_starting_word_is_rejected() {
        let engine = engine();
        assert!(matches!(
            engine.create_session(Some("c4t")),
            Err(EngineError::InvalidStartingWord { .. })
        ));
    }

    #[test]
    fn add_word_responses() {
        let engine = engine();
        let id = engine.create_session(Some("art")).unwrap();

        let ok = engine.add_word(&id, "tart").unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, "Added letter: T");
        assert_eq!(ok.added_letter, Some('t'));
        assert_eq!(ok.height, Some(2));

        assert_eq!(engine.next_word_count(&id).unwrap(), 1);
        assert_eq!(engine.get_state(&id).unwrap().hints_used, 0);

        let dup = engine.add_word(&id, "tart").unwrap();
        assert!(!dup.success);
        assert_eq!(dup.message, "'tart' has already been used");
        assert_eq!(dup.height, None);
    }

    #[test]
    fn undo_responses() {
        let engine = engine();
        let id = engine.create_session(Some("art")).unwrap();
        engine.add_word(&id, "tart").unwrap();

        let undone = engine.undo(&id).unwrap();
        assert!(undone.success);
        assert_eq!(undone.message, "Removed 'tart'");
        assert_eq!(undone.current_word.as_deref(), Some("art"));

        let refused = engine.undo(&id).unwrap();
        assert!(!refused.success);
        assert_eq!(refused.error, Some(GameError::CannotUndoStart));
    }

    #[test]
    fn hint_and_end() {
        let engine = engine();
        let id = engine.create_session(Some("art")).unwrap();

        let hint = engine.hint(&id, "length").unwrap();
        assert!(hint.success);
        assert_eq!(hint.hint_text.as_deref(), Some("The next word should be 4 letters long"));
        assert_eq!(hint.candidate_count, Some(1));

        engine.add_word(&id, "tart").unwrap();
        engine.add_word(&id, "start").unwrap();
        let exhausted = engine.hint(&id, "smart").unwrap();
        assert!(!exhausted.success);
        assert!(exhausted.no_moves_available);

        let summary = engine.end(&id).unwrap();
        assert_eq!(summary.hints_used, 2);
        assert_eq!(summary.score.base_score, 26);

        let after = engine.hint(&id, "smart").unwrap();
        assert!(after.no_moves_available);
        assert_eq!(after.candidate_count, Some(0));
        assert!(matches!(
            engine.end(&id),
            Err(EngineError::Game(GameError::GameEnded))
        ));

        engine.reset(&id).unwrap();
        assert!(engine.get_state(&id).unwrap().is_active);
    }

    #[test]
    fn unknown_session() {
        let engine = engine();
        assert_eq!(
            engine.get_state("nope").unwrap_err(),
            EngineError::SessionNotFound("nope".to_string())
        );
        assert!(engine.add_word("nope", "tart").is_err());
    }

    #[test]
    fn oracle_is_shared_by_new_sessions() {
        let oracle: Arc<dyn WordOracle> = Arc::new(FakeOracle::knowing(["rats"]));
        let engine = engine().with_oracle(Some(oracle));
        assert!(engine.has_oracle());

        let id = engine.create_session(Some("art")).unwrap();
        assert!(engine.add_word(&id, "rats").unwrap().success);
        assert_eq!(engine.stats().oracle_hits, 1);
    }

    #[test]
    fn responses_serialize_without_empty_fields() {
        let engine = engine();
        let id = engine.create_session(Some("art")).unwrap();
        let json = serde_json::to_value(engine.add_word(&id, "tart").unwrap()).unwrap();
        assert_eq!(json["added_letter"], "t");
        assert!(json.get("error").is_none());
    }
}
