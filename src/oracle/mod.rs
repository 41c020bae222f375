//! External word knowledge
//!
//! A [`WordOracle`] answers questions the local lexicon cannot: whether an
//! unfamiliar word is real, how common a word is, and what it means. Oracles
//! may be slow, so every implementation must bound its calls with a timeout
//! and fail closed: an oracle that cannot answer says "unknown".

mod cache;
pub mod datamuse;

pub use cache::LruCache;
pub use datamuse::DatamuseOracle;

use crate::config::OracleConfig;
use crate::error::OracleError;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, PoisonError};

/// Fallback source of word knowledge
pub trait WordOracle: Send + Sync {
    /// Whether `word` is a real word
    ///
    /// # Errors
    ///
    /// Returns an [`OracleError`] when the oracle could not give an answer;
    /// callers treat that as "unknown" for this request only.
    fn check(&self, word: &str) -> Result<bool, OracleError>;

    /// Relative frequency of `word` (occurrences per million); `0.0` if unknown
    fn frequency(&self, word: &str) -> f64;

    /// A short dictionary definition, if one is available
    fn definition(&self, word: &str) -> Option<String>;
}

/// Memoizes another oracle's answers in bounded LRU caches
///
/// Only definitive word checks are cached; a failed check is asked again on
/// the next lookup.
pub struct CachedOracle<O> {
    inner: O,
    checks: Mutex<LruCache<bool>>,
    frequencies: Mutex<LruCache<f64>>,
    definitions: Mutex<LruCache<Option<String>>>,
}

impl<O: WordOracle> CachedOracle<O> {
    /// Wrap `inner` with caches sized from `config`
    #[must_use]
    pub fn new(inner: O, config: &OracleConfig) -> Self {
        Self {
            inner,
            checks: Mutex::new(LruCache::new(config.check_cache_capacity)),
            frequencies: Mutex::new(LruCache::new(config.frequency_cache_capacity)),
            definitions: Mutex::new(LruCache::new(config.definition_cache_capacity)),
        }
    }

    /// The wrapped oracle
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

/// Cache-then-ask; the lock is not held while the inner oracle is queried
///
/// Errors from `ask` are returned without being cached.
fn memoized<V: Clone, E>(
    cache: &Mutex<LruCache<V>>,
    key: &str,
    ask: impl FnOnce() -> Result<V, E>,
) -> Result<V, E> {
    let key = key.to_lowercase();
    if let Some(hit) = cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(hit);
    }
    let value = ask()?;
    cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(&key, value.clone());
    Ok(value)
}

fn always<V>(value: V) -> Result<V, Infallible> {
    Ok(value)
}

impl<O: WordOracle> WordOracle for CachedOracle<O> {
    fn check(&self, word: &str) -> Result<bool, OracleError> {
        memoized(&self.checks, word, || self.inner.check(word))
    }

    fn frequency(&self, word: &str) -> f64 {
        let Ok(frequency) = memoized(&self.frequencies, word, || {
            always(self.inner.frequency(word))
        });
        frequency
    }

    fn definition(&self, word: &str) -> Option<String> {
        let Ok(definition) = memoized(&self.definitions, word, || {
            always(self.inner.definition(word))
        });
        definition
    }
}

/// Build the oracle described by `config`
///
/// Returns `None` when the oracle is disabled; otherwise a cached Datamuse
/// client.
///
/// # Errors
///
/// Returns [`OracleError::Unavailable`] if the HTTP client cannot be built.
pub fn from_config(config: &OracleConfig) -> Result<Option<Arc<dyn WordOracle>>, OracleError> {
    if !config.enabled {
        return Ok(None);
    }
    let oracle = CachedOracle::new(DatamuseOracle::new(config)?, config);
    Ok(Some(Arc::new(oracle)))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::WordOracle;
    use crate::error::OracleError;
    use rustc_hash::FxHashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory oracle that counts calls
    #[derive(Default)]
    pub struct FakeOracle {
        known: FxHashMap<String, (f64, Option<String>)>,
        check_calls: AtomicUsize,
        failures_left: AtomicUsize,
    }

    impl FakeOracle {
        pub fn knowing<const N: usize>(words: [&str; N]) -> Self {
            let mut oracle = Self::default();
            for word in words {
                oracle.known.insert(word.to_string(), (1.0, None));
            }
            oracle
        }

        pub fn with_entry(mut self, word: &str, frequency: f64, definition: Option<&str>) -> Self {
            self.known.insert(
                word.to_string(),
                (frequency, definition.map(str::to_string)),
            );
            self
        }

        /// Time out on the next `count` checks
        pub fn failing_next(self, count: usize) -> Self {
            self.failures_left.store(count, Ordering::SeqCst);
            self
        }

        pub fn check_calls(&self) -> usize {
            self.check_calls.load(Ordering::SeqCst)
        }
    }

    impl WordOracle for FakeOracle {
        fn check(&self, word: &str) -> Result<bool, OracleError> {
            self.check_calls.fetch_add(1, Ordering::SeqCst);
            let failing = self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if failing {
                return Err(OracleError::Timeout);
            }
            Ok(self.known.contains_key(word))
        }

        fn frequency(&self, word: &str) -> f64 {
            self.known.get(word).map_or(0.0, |(f, _)| *f)
        }

        fn definition(&self, word: &str) -> Option<String> {
            self.known.get(word).and_then(|(_, d)| d.clone())
        }
    }
}
