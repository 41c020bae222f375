//! Datamuse word oracle
//!
//! Queries the public Datamuse API (`/words?sp=<word>`) with a short timeout.
//! Failed word checks are reported as errors; failed frequency and
//! definition lookups are logged and reported as "unknown".

use super::WordOracle;
use crate::config::OracleConfig;
use crate::error::OracleError;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

/// One result row from the Datamuse `/words` endpoint
#[derive(Debug, Deserialize)]
struct Entry {
    word: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    defs: Vec<String>,
}

/// Metadata flags understood by the `md` query parameter
#[derive(Debug, Clone, Copy)]
enum Metadata {
    Frequency,
    Definitions,
}

impl Metadata {
    const fn flag(self) -> &'static str {
        match self {
            Self::Frequency => "f",
            Self::Definitions => "d",
        }
    }
}

/// Oracle backed by the Datamuse API
pub struct DatamuseOracle {
    client: Client,
    base_url: String,
}

impl DatamuseOracle {
    /// Build a client honouring the configured timeout
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Unavailable`] if the HTTP client cannot be created.
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(concat!("word_tower/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the entry whose spelling matches `word` exactly
    fn lookup(&self, word: &str, metadata: Option<Metadata>) -> Result<Option<Entry>, OracleError> {
        let word = word.trim().to_lowercase();
        let mut params = vec![("sp", word.as_str()), ("max", "1")];
        if let Some(md) = metadata {
            params.push(("md", md.flag()));
        }

        let entries: Vec<Entry> = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(entries
            .into_iter()
            .next()
            .filter(|entry| entry.word.eq_ignore_ascii_case(&word)))
    }

    fn lookup_or_log(&self, word: &str, metadata: Option<Metadata>) -> Option<Entry> {
        match self.lookup(word, metadata) {
            Ok(entry) => {
                debug!(word, found = entry.is_some(), "Datamuse lookup");
                entry
            }
            Err(err) => {
                warn!(word, error = %err, "Datamuse lookup failed, treating word as unknown");
                None
            }
        }
    }
}

impl WordOracle for DatamuseOracle {
    fn check(&self, word: &str) -> Result<bool, OracleError> {
        self.lookup(word, None)
            .map(|entry| entry.is_some())
            .inspect_err(|err| warn!(word, error = %err, "Datamuse check failed"))
    }

    fn frequency(&self, word: &str) -> f64 {
        self.lookup_or_log(word, Some(Metadata::Frequency))
            .and_then(|entry| parse_frequency(&entry.tags))
            .unwrap_or(0.0)
    }

    fn definition(&self, word: &str) -> Option<String> {
        self.lookup_or_log(word, Some(Metadata::Definitions))
            .and_then(|entry| entry.defs.first().map(|d| clean_definition(d)))
            .filter(|d| !d.is_empty())
    }
}

/// Extract the `f:<per-million>` frequency tag
fn parse_frequency(tags: &[String]) -> Option<f64> {
    tags.iter()
        .find_map(|tag| tag.strip_prefix("f:"))
        .and_then(|value| value.parse().ok())
}

/// Drop the part-of-speech prefix (`"n\t..."`) from a definition
fn clean_definition(raw: &str) -> String {
    raw.split_once('\t')
        .map_or(raw, |(_, definition)| definition)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn parses_frequency_tag() {
        let tags = vec!["syn".to_string(), "f:42.5".to_string()];
        assert_eq!(parse_frequency(&tags), Some(42.5));
        assert_eq!(parse_frequency(&[]), None);
        assert_eq!(parse_frequency(&["f:abc".to_string()]), None);
    }

    #[test]
    fn strips_part_of_speech() {
        assert_eq!(
            clean_definition("n\ta small open pie"),
            "a small open pie"
        );
        assert_eq!(clean_definition("no tag here"), "no tag here");
    }

    #[test]
    fn entry_deserializes_with_missing_fields() {
        let entries: Vec<Entry> =
            serde_json::from_str(r#"[{"word":"tart","score":100}]"#).unwrap();
        assert_eq!(entries[0].word, "tart");
        assert!(entries[0].tags.is_empty());
        assert!(entries[0].defs.is_empty());
    }

    #[test]
    fn unreachable_service_fails_closed() {
        let config = OracleConfig {
            // Port 9 (discard) is closed on test machines; the connection is refused
            base_url: "http://127.0.0.1:9/words".to_string(),
            timeout: Duration::from_millis(500),
            ..OracleConfig::default()
        };
        let oracle = DatamuseOracle::new(&config).unwrap();

        let start = Instant::now();
        assert!(oracle.check("tart").is_err());
        assert!(oracle.frequency("tart").abs() < f64::EPSILON);
        assert_eq!(oracle.definition("tart"), None);
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
