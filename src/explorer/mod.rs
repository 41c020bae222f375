//! Tallest-tower search
//!
//! Words are grouped by their sorted letters ("signature"), so the words that
//! can be stacked on `w` are exactly the words whose signature is `w`'s
//! letters plus one more. Every step adds a letter, so towers form a DAG and
//! the tallest tower from each word can be memoised.

use crate::core::Word;
use crate::lexicon::Lexicon;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

fn signature(letters: impl Iterator<Item = char>) -> String {
    let mut sorted: Vec<char> = letters.collect();
    sorted.sort_unstable();
    sorted.into_iter().collect()
}

/// Snapshot of the lexicon indexed by letter signature
pub struct TowerExplorer {
    by_signature: FxHashMap<String, Vec<String>>,
}

impl TowerExplorer {
    /// Index every word of the lexicon
    #[must_use]
    pub fn new(lexicon: &Lexicon) -> Self {
        let mut by_signature: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for (length, _) in lexicon.length_histogram() {
            for word in lexicon.words_of_length(length) {
                by_signature
                    .entry(signature(word.text().chars()))
                    .or_default()
                    .push(word.into_string());
            }
        }
        for words in by_signature.values_mut() {
            words.sort_unstable();
        }
        Self { by_signature }
    }

    /// Words that can be stacked directly on `word`, alphabetically
    #[must_use]
    pub fn next_words(&self, word: &str) -> Vec<&str> {
        let mut next: Vec<&str> = ('a'..='z')
            .filter_map(|extra| {
                self.by_signature
                    .get(&signature(word.chars().chain(std::iter::once(extra))))
            })
            .flatten()
            .map(String::as_str)
            .collect();
        next.sort_unstable();
        next
    }

    /// One of the tallest towers starting at `start`
    ///
    /// `start` need not be in the lexicon. Ties are broken alphabetically.
    ///
    /// # Examples
    /// ```
    /// use word_tower::core::Word;
    /// use word_tower::explorer::TowerExplorer;
    /// use word_tower::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["art", "tart", "rats", "start", "stare"]).unwrap();
    /// let explorer = TowerExplorer::new(&lexicon);
    ///
    /// let tower = explorer.tallest_from(&Word::new("art").unwrap());
    /// let words: Vec<&str> = tower.iter().map(Word::text).collect();
    /// assert_eq!(words, ["art", "rats", "stare"]);
    /// ```
    #[must_use]
    pub fn tallest_from(&self, start: &Word) -> Vec<Word> {
        let mut memo: FxHashMap<String, (usize, Option<String>)> = FxHashMap::default();
        self.height_from(start.text(), &mut memo);

        let mut tower = vec![start.clone()];
        let mut current = start.text().to_string();
        while let Some((_, Some(next))) = memo.get(&current) {
            tower.push(Word::from_normalized(next.clone()));
            current.clone_from(next);
        }
        tower
    }

    /// Height of the tallest tower from `start` (1 if nothing can be stacked)
    #[must_use]
    pub fn tallest_height(&self, start: &Word) -> usize {
        let mut memo = FxHashMap::default();
        self.height_from(start.text(), &mut memo)
    }

    fn height_from(
        &self,
        word: &str,
        memo: &mut FxHashMap<String, (usize, Option<String>)>,
    ) -> usize {
        if let Some((height, _)) = memo.get(word) {
            return *height;
        }

        let mut best: (usize, Option<String>) = (1, None);
        for next in self.next_words(word) {
            let height = 1 + self.height_from(next, memo);
            if height > best.0 {
                best = (height, Some(next.to_string()));
            }
        }

        let height = best.0;
        memo.insert(word.to_string(), best);
        height
    }

    /// Tallest tower height from each start, computed in parallel
    ///
    /// `on_done` is called once per finished start (from worker threads).
    pub fn survey<F>(&self, starts: &[Word], on_done: F) -> Vec<(Word, usize)>
    where
        F: Fn() + Sync,
    {
        starts
            .par_iter()
            .map(|start| {
                let height = self.tallest_height(start);
                on_done();
                (start.clone(), height)
            })
            .collect()
    }
}

/// Height distribution of a survey
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyReport {
    pub starts: usize,
    /// (height, number of starting words), lowest first
    pub distribution: Vec<(usize, usize)>,
    /// Starting words reaching the greatest height
    pub best: Vec<String>,
    pub best_height: usize,
}

impl SurveyReport {
    #[must_use]
    pub fn from_heights(heights: &[(Word, usize)]) -> Self {
        let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
        for (_, height) in heights {
            *counts.entry(*height).or_insert(0) += 1;
        }
        let mut distribution: Vec<(usize, usize)> = counts.into_iter().collect();
        distribution.sort_unstable();

        let best_height = heights.iter().map(|(_, h)| *h).max().unwrap_or(0);
        let mut best: Vec<String> = heights
            .iter()
            .filter(|(_, h)| *h == best_height)
            .map(|(w, _)| w.to_string())
            .collect();
        best.sort();

        Self {
            starts: heights.len(),
            distribution,
            best,
            best_height,
        }
    }

    /// Mean height over all starts
    #[must_use]
    pub fn average_height(&self) -> f64 {
        if self.starts == 0 {
            return 0.0;
        }
        let total: usize = self.distribution.iter().map(|(h, n)| h * n).sum();
        total as f64 / self.starts as f64
    }
}
