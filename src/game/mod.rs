//! Game sessions and their storage

mod session;
mod store;

pub use session::{GameSession, GameState, GameSummary, SessionState, WordAdded, WordRemoved};
pub use store::{SessionStore, SharedSession};
