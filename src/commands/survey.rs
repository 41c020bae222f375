//! Survey command
//!
//! Measures how tall towers get from every starting word of a given length.

use crate::core::Word;
use crate::explorer::{SurveyReport, TowerExplorer};
use crate::lexicon::Lexicon;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Survey outcome plus timing
pub struct SurveyResult {
    pub report: SurveyReport,
    pub starting_length: usize,
    pub duration: Duration,
}

/// Compute tallest-tower heights for the starting words of `length`
///
/// Starting words are taken alphabetically, at most `limit` of them.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_survey(
    lexicon: &Lexicon,
    length: usize,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<SurveyResult> {
    let mut starts: Vec<Word> = lexicon.words_of_length(length);
    starts.sort();
    starts.truncate(limit.unwrap_or(starts.len()));

    let pb = if show_progress {
        let pb = ProgressBar::new(starts.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb.set_message("Climbing...");
        pb
    } else {
        ProgressBar::hidden()
    };

    let began = Instant::now();
    let explorer = TowerExplorer::new(lexicon);
    let heights = explorer.survey(&starts, || pb.inc(1));
    pb.finish_with_message("Complete!");

    Ok(SurveyResult {
        report: SurveyReport::from_heights(&heights),
        starting_length: length,
        duration: began.elapsed(),
    })
}
