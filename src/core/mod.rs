//! Core domain types for the word tower
//!
//! Pure, deterministic building blocks: words, letter multisets and the
//! anagram-plus-one rule. Nothing here touches the lexicon or any I/O.

mod letters;
mod rule;
mod word;

pub use letters::LetterCounts;
pub use rule::{BuildRejection, added_letter, build_message, can_build};
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
