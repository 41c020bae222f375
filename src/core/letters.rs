//! Letter multisets
//!
//! Counts of each letter in a word, used by the tower rule to compare words
//! independently of letter order.

use rustc_hash::FxHashMap;

/// Multiset of the letters in a word
///
/// Letters are compared case-insensitively. Any character is counted, so the
/// multiset is total over arbitrary input even though tower words are always
/// lowercase ASCII.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count the letters of `text`
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in text.chars().flat_map(char::to_lowercase) {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Letters of `self` that `other` has fewer of, deduplicated and sorted
    #[must_use]
    pub fn missing_from(&self, other: &Self) -> Vec<char> {
        let mut missing: Vec<char> = self
            .counts
            .iter()
            .filter(|&(&letter, &count)| other.count(letter) < count)
            .map(|(&letter, _)| letter)
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Multiset difference `self − other`: each letter repeated by how many
    /// more times it occurs in `self` than in `other`. Sorted.
    #[must_use]
    pub fn surplus_over(&self, other: &Self) -> Vec<char> {
        let mut surplus: Vec<char> = self
            .counts
            .iter()
            .flat_map(|(&letter, &count)| {
                std::iter::repeat_n(letter, count.saturating_sub(other.count(letter)))
            })
            .collect();
        surplus.sort_unstable();
        surplus
    }

    /// Add one occurrence of `letter`
    pub fn add(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let counts = LetterCounts::of("start");
        assert_eq!(counts.count('t'), 2);
        assert_eq!(counts.count('s'), 1);
        assert_eq!(counts.count('z'), 0);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn counting_is_case_insensitive() {
        assert_eq!(LetterCounts::of("TaRt"), LetterCounts::of("tart"));
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(LetterCounts::of("stare"), LetterCounts::of("tears"));
    }

    #[test]
    fn missing_letters() {
        let base = LetterCounts::of("tart");
        let candidate = LetterCounts::of("star");
        assert_eq!(base.missing_from(&candidate), vec!['t']);
        assert!(base.missing_from(&LetterCounts::of("start")).is_empty());
    }

    #[test]
    fn surplus_letters() {
        let candidate = LetterCounts::of("start");
        let base = LetterCounts::of("art");
        assert_eq!(candidate.surplus_over(&base), vec!['s', 't']);
    }

    #[test]
    fn add_letter() {
        let mut counts = LetterCounts::of("art");
        counts.add('t');
        assert_eq!(counts, LetterCounts::of("tart"));
    }
}
