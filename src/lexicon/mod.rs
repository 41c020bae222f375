//! The lexicon of known words
//!
//! An in-memory word set indexed by length, shared read-only by every game in
//! the process. The only mutation is [`Lexicon::learn`], used to fold in words
//! an oracle confirmed; it takes the write half of an `RwLock`, so readers
//! never observe a half-updated index.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::error::LexiconError;
use crate::oracle::WordOracle;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

#[derive(Debug, Default)]
struct Index {
    words: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<String>>,
}

impl Index {
    fn insert(&mut self, word: Word) -> bool {
        if self.words.contains(word.text()) {
            return false;
        }
        let text = word.into_string();
        self.by_length
            .entry(text.len())
            .or_default()
            .push(text.clone());
        self.words.insert(text);
        true
    }
}

/// How a word was (or was not) recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Found in the local word set
    Local,
    /// Missing locally, confirmed by the oracle (and now learned)
    Oracle,
    /// Not recognized
    Unknown,
}

impl Lookup {
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Counters for word validation lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationStats {
    pub local_hits: u64,
    pub oracle_hits: u64,
    pub oracle_misses: u64,
}

impl ValidationStats {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.local_hits + self.oracle_hits + self.oracle_misses
    }

    /// Share of lookups answered locally, in percent (0 when nothing was looked up)
    #[must_use]
    pub fn local_hit_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.local_hits as f64 / total as f64 * 100.0,
        }
    }
}

#[derive(Debug, Default)]
struct Counters {
    local_hits: AtomicU64,
    oracle_hits: AtomicU64,
    oracle_misses: AtomicU64,
}

/// Set of known words plus a length index
#[derive(Debug)]
pub struct Lexicon {
    index: RwLock<Index>,
    counters: Counters,
}

impl Lexicon {
    /// Build a lexicon from a list of words
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped and
    /// duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::MalformedEntry`] for the first entry that is not
    /// a valid word (the reported line is the 1-based entry position), or
    /// [`LexiconError::Empty`] if no words remain.
    ///
    /// # Examples
    /// ```
    /// use word_tower::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["art", "Tart", "start"]).unwrap();
    /// assert!(lexicon.is_known("TART"));
    /// assert_eq!(lexicon.words_of_length(5).len(), 1);
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Index::default();

        for (i, entry) in words.into_iter().enumerate() {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            let word = Word::new(entry).map_err(|e| LexiconError::MalformedEntry {
                line: i + 1,
                entry: entry.to_string(),
                reason: e.to_string(),
            })?;
            index.insert(word);
        }

        if index.words.is_empty() {
            return Err(LexiconError::Empty);
        }

        debug!(words = index.words.len(), "Built lexicon");

        Ok(Self {
            index: RwLock::new(index),
            counters: Counters::default(),
        })
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let mut index = Index::default();
        for word in loader::words_from_slice(WORDS) {
            index.insert(word);
        }
        Self {
            index: RwLock::new(index),
            counters: Counters::default(),
        }
    }

    /// Load a word list file, one word per line
    ///
    /// # Errors
    ///
    /// See [`loader::load_from_file`].
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, LexiconError> {
        loader::load_from_file(path)
    }

    fn read(&self) -> RwLockReadGuard<'_, Index> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Index> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether the (case-insensitive) word is in the set
    #[must_use]
    pub fn is_known(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.read().words.contains(word.as_str())
    }

    /// All known words of exactly `length` letters
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<Word> {
        self.read()
            .by_length
            .get(&length)
            .map(|words| words.iter().cloned().map(Word::from_normalized).collect())
            .unwrap_or_default()
    }

    /// Known words of exactly `length` letters that satisfy `predicate`
    ///
    /// Evaluated in parallel under a single read lock.
    pub fn filter_words_of_length<F>(&self, length: usize, predicate: F) -> Vec<Word>
    where
        F: Fn(&str) -> bool + Sync,
    {
        let index = self.read();
        let Some(words) = index.by_length.get(&length) else {
            return Vec::new();
        };
        words
            .par_iter()
            .filter(|w| predicate(w.as_str()))
            .cloned()
            .map(Word::from_normalized)
            .collect()
    }

    /// A uniformly chosen word of `length` letters, or `None` if there is none
    pub fn random_word_of_length<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<Word> {
        self.read()
            .by_length
            .get(&length)
            .and_then(|words| words.choose(rng))
            .cloned()
            .map(Word::from_normalized)
    }

    /// Add a word to the set
    ///
    /// Returns `true` if the word was new.
    pub fn learn(&self, word: &Word) -> bool {
        let added = self.write().insert(word.clone());
        if added {
            info!(word = %word, "Learned new word");
        }
        added
    }

    /// Recognize a word locally, falling back to `oracle` on a miss
    ///
    /// Oracle-confirmed words are learned so later lookups stay local.
    pub fn lookup(&self, word: &Word, oracle: Option<&dyn WordOracle>) -> Lookup {
        if self.is_known(word.text()) {
            self.counters.local_hits.fetch_add(1, Ordering::Relaxed);
            return Lookup::Local;
        }

        let Some(oracle) = oracle else {
            return Lookup::Unknown;
        };

        if matches!(oracle.check(word.text()), Ok(true)) {
            self.counters.oracle_hits.fetch_add(1, Ordering::Relaxed);
            self.learn(word);
            Lookup::Oracle
        } else {
            self.counters.oracle_misses.fetch_add(1, Ordering::Relaxed);
            Lookup::Unknown
        }
    }

    /// Snapshot of the lookup counters
    #[must_use]
    pub fn stats(&self) -> ValidationStats {
        ValidationStats {
            local_hits: self.counters.local_hits.load(Ordering::Relaxed),
            oracle_hits: self.counters.oracle_hits.load(Ordering::Relaxed),
            oracle_misses: self.counters.oracle_misses.load(Ordering::Relaxed),
        }
    }

    /// Number of known words
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().words.is_empty()
    }

    /// Word counts per length, shortest first
    #[must_use]
    pub fn length_histogram(&self) -> Vec<(usize, usize)> {
        let mut histogram: Vec<(usize, usize)> = self
            .read()
            .by_length
            .iter()
            .map(|(&len, words)| (len, words.len()))
            .collect();
        histogram.sort_unstable();
        histogram
    }
}
