//! Bounded least-recently-used cache

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Fixed-capacity map that evicts the least recently used entry
///
/// Recency is tracked with a monotonically increasing tick; the `BTreeMap`
/// keyed by tick gives the eviction victim in `O(log n)`.
#[derive(Debug)]
pub struct LruCache<V> {
    capacity: usize,
    tick: u64,
    entries: FxHashMap<String, (V, u64)>,
    recency: BTreeMap<u64, String>,
}

impl<V: Clone> LruCache<V> {
    /// Create an empty cache holding at most `capacity` entries
    ///
    /// A capacity of zero disables caching.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tick: 0,
            entries: FxHashMap::default(),
            recency: BTreeMap::new(),
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Look up `key`, marking it most recently used
    pub fn get(&mut self, key: &str) -> Option<V> {
        let tick = self.next_tick();
        let (value, last_used) = self.entries.get_mut(key)?;
        self.recency.remove(&*last_used);
        *last_used = tick;
        self.recency.insert(tick, key.to_string());
        Some(value.clone())
    }

    /// Insert or replace `key`, evicting the least recently used entry when full
    pub fn insert(&mut self, key: &str, value: V) {
        if self.capacity == 0 {
            return;
        }

        let tick = self.next_tick();
        if let Some((_, old_tick)) = self.entries.insert(key.to_string(), (value, tick)) {
            self.recency.remove(&old_tick);
        }
        self.recency.insert(tick, key.to_string());

        while self.entries.len() > self.capacity {
            let Some((_, victim)) = self.recency.pop_first() else {
                break;
            };
            self.entries.remove(&victim);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
