//! Engine configuration
//!
//! Plain structs with sensible defaults; the CLI overrides fields from flags.

use crate::scoring::ScoreRules;
use std::time::Duration;

/// Default Datamuse endpoint
pub const DATAMUSE_URL: &str = "https://api.datamuse.com/words";

/// Settings for the optional word oracle
#[derive(Debug, Clone, PartialEq)]
pub struct OracleConfig {
    /// Consult the oracle when the lexicon misses
    pub enabled: bool,
    pub base_url: String,
    /// Upper bound on each oracle request
    pub timeout: Duration,
    pub check_cache_capacity: usize,
    pub frequency_cache_capacity: usize,
    pub definition_cache_capacity: usize,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: DATAMUSE_URL.to_string(),
            timeout: Duration::from_secs(2),
            check_cache_capacity: 10_000,
            frequency_cache_capacity: 1_000,
            definition_cache_capacity: 500,
        }
    }
}

/// Settings for a [`TowerEngine`](crate::engine::TowerEngine)
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Length of randomly drawn starting words
    pub starting_word_length: usize,
    /// Used when the lexicon has no word of `starting_word_length`
    pub fallback_starting_word: String,
    /// Sessions untouched for this long are evicted
    pub session_idle_timeout: Duration,
    /// Master seed; `None` seeds from the OS
    pub seed: Option<u64>,
    pub oracle: OracleConfig,
    pub scoring: ScoreRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_word_length: 3,
            fallback_starting_word: "cat".to_string(),
            session_idle_timeout: Duration::from_secs(30 * 60),
            seed: None,
            oracle: OracleConfig::default(),
            scoring: ScoreRules::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.starting_word_length, 3);
        assert_eq!(config.fallback_starting_word, "cat");
        assert_eq!(config.session_idle_timeout, Duration::from_secs(1800));
        assert!(!config.oracle.enabled);
        assert_eq!(config.oracle.timeout, Duration::from_secs(2));
        assert_eq!(config.oracle.check_cache_capacity, 10_000);
    }
}
