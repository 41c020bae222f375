//! Formatting utilities for terminal output

use crate::core::Word;

/// Tower as a single line, bottom word first
#[must_use]
pub fn tower_line(tower: &[Word]) -> String {
    tower
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Tower drawn top word first, each level centred over the widest
///
/// ```text
///  [ S T A R T ]
///   [ T A R T ]
///    [ A R T ]
/// ```
#[must_use]
pub fn tower_art(tower: &[Word]) -> Vec<String> {
    let width = tower.iter().map(Word::len).max().unwrap_or(0);
    tower
        .iter()
        .rev()
        .map(|word| {
            let letters: Vec<String> = word
                .text()
                .chars()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect();
            let indent = width - word.len();
            format!("{}[ {} ]", " ".repeat(indent), letters.join(" "))
        })
        .collect()
}

/// Word in capitals with the letter added at this level in brackets
///
/// The last occurrence of the letter is marked, since any copy of a repeated
/// letter is equally "new".
#[must_use]
pub fn mark_added_letter(word: &Word, added: char) -> String {
    let chars: Vec<char> = word.text().chars().collect();
    let Some(pos) = chars.iter().rposition(|&c| c == added) else {
        return word.text().to_uppercase();
    };
    let upper = |part: &[char]| part.iter().collect::<String>().to_uppercase();
    format!(
        "{}({}){}",
        upper(&chars[..pos]),
        upper(&chars[pos..=pos]),
        upper(&chars[pos + 1..])
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
