//! Session storage with idle eviction
//!
//! Sessions are keyed by a random UUID and wrapped in their own mutex, so one
//! session is only ever driven by one caller at a time while different
//! sessions proceed in parallel. Sessions idle for longer than the timeout are
//! swept lazily whenever a session is created or fetched.

use super::GameSession;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::info;
use uuid::Uuid;

/// Shared handle to one session
pub type SharedSession = Arc<Mutex<GameSession>>;

struct Entry {
    session: SharedSession,
    last_accessed: Instant,
}

/// Owns every live session
pub struct SessionStore {
    idle_timeout: Duration,
    entries: Mutex<FxHashMap<String, Entry>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            idle_timeout,
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a session and return its new id
    pub fn insert(&self, session: GameSession) -> String {
        let now = Instant::now();
        let id = Uuid::new_v4().to_string();

        let mut entries = self.entries();
        Self::sweep(&mut entries, now, self.idle_timeout);
        entries.insert(
            id.clone(),
            Entry {
                session: Arc::new(Mutex::new(session)),
                last_accessed: now,
            },
        );
        id
    }

    /// Fetch a session, refreshing its idle timer
    ///
    /// Returns `None` for unknown or expired ids.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<SharedSession> {
        let now = Instant::now();
        let mut entries = self.entries();
        Self::sweep(&mut entries, now, self.idle_timeout);

        let entry = entries.get_mut(id)?;
        entry.last_accessed = now;
        Some(Arc::clone(&entry.session))
    }

    /// Drop a session; returns whether it existed
    pub fn remove(&self, id: &str) -> bool {
        self.entries().remove(id).is_some()
    }

    /// Evict every session idle for longer than the timeout
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    /// Evict sessions that would be expired at `now`
    pub fn sweep_expired_at(&self, now: Instant) -> usize {
        Self::sweep(&mut self.entries(), now, self.idle_timeout)
    }

    fn sweep(entries: &mut FxHashMap<String, Entry>, now: Instant, idle_timeout: Duration) -> usize {
        let before = entries.len();
        entries.retain(|id, entry| {
            let keep = now.saturating_duration_since(entry.last_accessed) < idle_timeout;
            if !keep {
                info!(session = %id, "Evicted idle session");
            }
            keep
        });
        before - entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
