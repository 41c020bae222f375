//! Tower word representation
//!
//! A Word is a normalized (lowercase ASCII) sequence of 1-15 letters.

use super::letters::LetterCounts;
use serde::Serialize;
use std::fmt;

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 1;

/// Longest word the game accepts
pub const MAX_WORD_LENGTH: usize = 15;

/// A tower word
///
/// Case-insensitive: the text is lowercased on construction, so two words
/// that differ only by case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH} letters, got {len}"
                )
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 1-15
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_tower::core::Word;
    ///
    /// let word = Word::new("Start").unwrap();
    /// assert_eq!(word.text(), "start");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("st4rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Wrap text that is already known to be a normalized word
    ///
    /// Used for entries coming back out of the lexicon, which only ever
    /// stores text that passed [`Word::new`].
    pub(crate) fn from_normalized(text: String) -> Self {
        debug_assert!(Self::new(&text).is_ok_and(|w| w.text == text));
        Self { text }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letter multiset of this word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::of(&self.text)
    }

    /// Letters in alphabetical order, e.g. `"tart"` → `['a', 'r', 't', 't']`
    #[must_use]
    pub fn sorted_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.text.chars().collect();
        letters.sort_unstable();
        letters
    }

    /// Consume the word, returning its text
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("tart").unwrap();
        assert_eq!(word.text(), "tart");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("START").unwrap().text(), "start");
        assert_eq!(Word::new("StArT").unwrap().text(), "start");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  art\n").unwrap().text(), "art");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(
            Word::new("incomprehensibility"),
            Err(WordError::InvalidLength(19))
        ));
        assert!(Word::new("a").is_ok());
        assert!(Word::new("abcdefghijklmno").is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("st4rt"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("st art"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_sorted_letters() {
        let word = Word::new("tart").unwrap();
        assert_eq!(word.sorted_letters(), vec!['a', 'r', 't', 't']);
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("Art").unwrap(), Word::new("aRT").unwrap());
        assert_ne!(Word::new("art").unwrap(), Word::new("rat").unwrap());
    }

    #[test]
    fn word_display() {
        let word = Word::new("Stare").unwrap();
        assert_eq!(format!("{word}"), "stare");
    }
}
