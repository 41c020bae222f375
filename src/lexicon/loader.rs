//! Word list loading utilities
//!
//! Reads word lists from plain text files (one word per line).

use super::Lexicon;
use crate::core::Word;
use crate::error::LexiconError;
use std::fs;
use std::path::Path;

/// Load a lexicon from a file
///
/// Blank lines are skipped; any other line must be a valid word.
///
/// # Errors
///
/// Returns [`LexiconError::Io`] if the file cannot be read,
/// [`LexiconError::MalformedEntry`] with the 1-based line number of the first
/// bad line, or [`LexiconError::Empty`] if the file has no words.
///
/// # Examples
/// ```no_run
/// use word_tower::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // `from_words` numbers entries by position, which matches line numbers
    // because every line (blank or not) is passed through
    Lexicon::from_words(content.lines())
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use word_tower::lexicon::loader::words_from_slice;
///
/// let words = words_from_slice(&["art", "t4rt", "start"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
