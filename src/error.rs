//! Error types
//!
//! Game rule failures are ordinary values: every variant of [`GameError`] is
//! an expected outcome of a player action, not a fault.

use crate::core::BuildRejection;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A player action the game rejected
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameError {
    #[error("'{word}' is not a valid word")]
    NotAWord { word: String },

    #[error("'{word}' has already been used")]
    AlreadyUsed { word: String },

    #[error("{0}")]
    InvalidBuild(BuildRejection),

    #[error("Cannot undo starting word")]
    CannotUndoStart,

    #[error("Game has already ended")]
    GameEnded,
}

/// Failure to build a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed word list entry on line {line}: '{entry}' ({reason})")]
    MalformedEntry {
        line: usize,
        entry: String,
        reason: String,
    },

    #[error("Word list is empty")]
    Empty,
}

/// Failure talking to a word oracle
///
/// Never escapes an oracle-backed lookup: callers treat every variant as
/// "word unknown".
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Oracle timed out")]
    Timeout,

    #[error("Oracle unavailable: {0}")]
    Unavailable(String),

    #[error("Oracle returned an unreadable response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Unavailable(err.to_string())
        }
    }
}

/// Failure of an engine call that is not a game rule rejection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Invalid starting word '{word}': {reason}")]
    InvalidStartingWord { word: String, reason: String },

    #[error(transparent)]
    Game(#[from] GameError),
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_error_messages() {
        assert_eq!(
            GameError::NotAWord {
                word: "xyz".into()
            }
            .to_string(),
            "'xyz' is not a valid word"
        );
        assert_eq!(
            GameError::AlreadyUsed {
                word: "tart".into()
            }
            .to_string(),
            "'tart' has already been used"
        );
        assert_eq!(
            GameError::CannotUndoStart.to_string(),
            "Cannot undo starting word"
        );
        assert_eq!(GameError::GameEnded.to_string(), "Game has already ended");
    }

    #[test]
    fn invalid_build_uses_rejection_reason() {
        let err = GameError::InvalidBuild(BuildRejection::WrongLength {
            expected: 4,
            actual: 5,
        });
        assert_eq!(err.to_string(), "Word must be exactly 4 letters long");
    }

    #[test]
    fn engine_error_wraps_game_error_transparently() {
        let err: EngineError = GameError::GameEnded.into();
        assert_eq!(err.to_string(), "Game has already ended");
    }

    #[test]
    fn lexicon_error_names_line() {
        let err = LexiconError::MalformedEntry {
            line: 7,
            entry: "h3llo".into(),
            reason: "Word contains invalid characters".into(),
        };
        assert!(err.to_string().contains("line 7"));
    }
}
