//! Hint rendering styles
//!
//! Defines the `HintStyle` trait and concrete implementations. No style ever
//! spells out the whole candidate: letter reveals are capped one short of the
//! full word, and definitions have the word masked out.

use crate::core::Word;
use crate::oracle::WordOracle;
use rand::{Rng, RngCore};

/// Everything a style may use to describe the chosen candidate
pub struct HintContext<'a> {
    /// The word the hint points at
    pub candidate: &'a Word,
    /// Current tower height
    pub height: usize,
    /// Length of the next word
    pub target_length: usize,
    /// Oracle for definitions, if one is configured
    pub oracle: Option<&'a dyn WordOracle>,
}

/// A way of describing a candidate without revealing it
pub trait HintStyle {
    /// Render the hint text for `ctx.candidate`
    fn render(&self, ctx: &HintContext<'_>, rng: &mut dyn RngCore) -> String;
}

/// Enum wrapper for all hint styles
///
/// Allows runtime selection by name while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    /// Leading letter(s)
    FirstLetters(FirstLetterHint),
    /// A few letters in place, the rest masked
    Pattern(PatternHint),
    /// Only the required length
    Length(LengthHint),
    /// One interior letter
    Contains(ContainsHint),
    /// A dictionary definition, falling back to a partial reveal
    Definition(DefinitionHint),
    /// Adapts to the tower height (default)
    Smart(SmartHint),
}

impl HintStyle for HintKind {
    fn render(&self, ctx: &HintContext<'_>, rng: &mut dyn RngCore) -> String {
        match self {
            Self::FirstLetters(s) => s.render(ctx, rng),
            Self::Pattern(s) => s.render(ctx, rng),
            Self::Length(s) => s.render(ctx, rng),
            Self::Contains(s) => s.render(ctx, rng),
            Self::Definition(s) => s.render(ctx, rng),
            Self::Smart(s) => s.render(ctx, rng),
        }
    }
}

impl HintKind {
    /// Create a style from its name
    ///
    /// Supported names: "first", "starts_with", "pattern", "length",
    /// "contains", "definition", "smart". Defaults to smart if the name is
    /// unrecognized.
    ///
    /// # Examples
    /// ```
    /// use word_tower::hints::HintKind;
    ///
    /// assert_eq!(HintKind::from_name("pattern").name(), "pattern");
    /// assert_eq!(HintKind::from_name("nonsense").name(), "smart");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "first" | "first_letter" | "starts_with" | "starts-with" => {
                Self::FirstLetters(FirstLetterHint::default())
            }
            "pattern" => Self::Pattern(PatternHint::default()),
            "length" => Self::Length(LengthHint),
            "contains" => Self::Contains(ContainsHint),
            "definition" => Self::Definition(DefinitionHint),
            _ => Self::Smart(SmartHint),
        }
    }

    /// Canonical name of the style
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FirstLetters(_) => "starts_with",
            Self::Pattern(_) => "pattern",
            Self::Length(_) => "length",
            Self::Contains(_) => "contains",
            Self::Definition(_) => "definition",
            Self::Smart(_) => "smart",
        }
    }

    /// Every style, for listings and help text
    #[must_use]
    pub fn all() -> [Self; 6] {
        [
            Self::Smart(SmartHint),
            Self::FirstLetters(FirstLetterHint::default()),
            Self::Pattern(PatternHint::default()),
            Self::Contains(ContainsHint),
            Self::Definition(DefinitionHint),
            Self::Length(LengthHint),
        ]
    }
}

impl Default for HintKind {
    fn default() -> Self {
        Self::Smart(SmartHint)
    }
}

/// Reveal the leading letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstLetterHint {
    pub count: usize,
}

impl Default for FirstLetterHint {
    fn default() -> Self {
        Self { count: 1 }
    }
}

impl HintStyle for FirstLetterHint {
    fn render(&self, ctx: &HintContext<'_>, _rng: &mut dyn RngCore) -> String {
        let text = ctx.candidate.text();
        let count = capped_reveal(self.count, text.len());
        let prefix = text[..count].to_uppercase();
        if count == 1 {
            format!("Try a {}-letter word starting with '{prefix}'", ctx.target_length)
        } else {
            format!("Try a {}-letter word starting with '{prefix}...'", ctx.target_length)
        }
    }
}

/// Reveal a few letters in place, masking the rest with `_`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternHint {
    pub reveal: usize,
}

impl Default for PatternHint {
    fn default() -> Self {
        Self { reveal: 2 }
    }
}

impl HintStyle for PatternHint {
    fn render(&self, ctx: &HintContext<'_>, rng: &mut dyn RngCore) -> String {
        format!(
            "Try a {}-letter word with pattern: {}",
            ctx.target_length,
            masked_pattern(ctx.candidate.text(), self.reveal, rng)
        )
    }
}

/// State the required length only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthHint;

impl HintStyle for LengthHint {
    fn render(&self, ctx: &HintContext<'_>, _rng: &mut dyn RngCore) -> String {
        format!("The next word should be {} letters long", ctx.target_length)
    }
}

/// Reveal the middle letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainsHint;

impl HintStyle for ContainsHint {
    fn render(&self, ctx: &HintContext<'_>, _rng: &mut dyn RngCore) -> String {
        let text = ctx.candidate.text();
        let letter = text[text.len() / 2..]
            .chars()
            .next()
            .map_or('?', |c| c.to_ascii_uppercase());
        format!(
            "Try a {}-letter word containing the letter '{letter}'",
            ctx.target_length
        )
    }
}

/// Quote a definition; without one, reveal the first half of the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionHint;

impl HintStyle for DefinitionHint {
    fn render(&self, ctx: &HintContext<'_>, _rng: &mut dyn RngCore) -> String {
        if let Some(definition) = definition_of(ctx) {
            return format!("Definition: {definition}");
        }
        let text = ctx.candidate.text();
        let half = capped_reveal(text.len() / 2, text.len());
        format!(
            "Try a {}-letter word (like '{}...')",
            ctx.target_length,
            text[..half].to_uppercase()
        )
    }
}

/// Difficulty scales with the tower
///
/// Low towers get two leading letters, mid-height towers a pattern revealing a
/// third of the letters, and tall towers only the first letter, or half the
/// time a definition when an oracle is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartHint;

impl HintStyle for SmartHint {
    fn render(&self, ctx: &HintContext<'_>, rng: &mut dyn RngCore) -> String {
        match ctx.height {
            0..=3 => FirstLetterHint { count: 2 }.render(ctx, rng),
            4..=6 => format!(
                "Try matching this pattern: {}",
                masked_pattern(ctx.candidate.text(), (ctx.target_length / 3).max(1), rng)
            ),
            _ => {
                if ctx.oracle.is_some()
                    && rng.random_bool(0.5)
                    && let Some(definition) = definition_of(ctx)
                {
                    return format!("Hint: {definition}");
                }
                FirstLetterHint { count: 1 }.render(ctx, rng)
            }
        }
    }
}

/// Never reveal every letter of a word
fn capped_reveal(wanted: usize, len: usize) -> usize {
    wanted.clamp(1, len.saturating_sub(1).max(1))
}

/// `S__R_`-style pattern with `reveal` random positions shown
fn masked_pattern(word: &str, reveal: usize, rng: &mut dyn RngCore) -> String {
    let len = word.len();
    let reveal = capped_reveal(reveal, len);
    let shown = rand::seq::index::sample(rng, len, reveal);
    let shown: Vec<usize> = shown.into_vec();

    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if shown.contains(&i) {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Oracle definition of the candidate with the word itself masked
fn definition_of(ctx: &HintContext<'_>) -> Option<String> {
    let oracle = ctx.oracle?;
    let definition = oracle.definition(ctx.candidate.text())?;
    let masked = mask_word(definition.trim(), ctx.candidate.text());
    (!masked.is_empty()).then_some(masked)
}

/// Replace every case-insensitive occurrence of `word` in `text` with underscores
pub(crate) fn mask_word(text: &str, word: &str) -> String {
    if word.is_empty() {
        return text.to_string();
    }
    let mask = "_".repeat(word.len());
    let mut masked = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match rest.get(..word.len()) {
            Some(head) if head.eq_ignore_ascii_case(word) => {
                masked.push_str(&mask);
                rest = &rest[word.len()..];
            }
            _ => {
                masked.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::testing::FakeOracle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn render(kind: HintKind, word: &str, height: usize, oracle: Option<&dyn WordOracle>) -> String {
        let candidate = Word::new(word).unwrap();
        let ctx = HintContext {
            candidate: &candidate,
            height,
            target_length: candidate.len(),
            oracle,
        };
        kind.render(&ctx, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn names_round_trip() {
        for kind in HintKind::all() {
            assert_eq!(HintKind::from_name(kind.name()), kind);
        }
        assert_eq!(HintKind::from_name("first").name(), "starts_with");
        assert_eq!(HintKind::from_name("STARTS_WITH").name(), "starts_with");
        assert_eq!(HintKind::from_name("").name(), "smart");
    }

    #[test]
    fn first_letter() {
        assert_eq!(
            render(HintKind::from_name("starts_with"), "start", 2, None),
            "Try a 5-letter word starting with 'S'"
        );
    }

    #[test]
    fn length_only() {
        assert_eq!(
            render(HintKind::from_name("length"), "start", 2, None),
            "The next word should be 5 letters long"
        );
    }

    #[test]
    fn contains_middle_letter() {
        assert_eq!(
            render(HintKind::from_name("contains"), "start", 2, None),
            "Try a 5-letter word containing the letter 'A'"
        );
    }

    #[test]
    fn pattern_reveals_two_letters_in_place() {
        let hint = render(HintKind::from_name("pattern"), "start", 2, None);
        let pattern = hint.rsplit(": ").next().unwrap();
        assert_eq!(pattern.len(), 5);
        assert_eq!(pattern.chars().filter(|&c| c != '_').count(), 2);
        for (shown, actual) in pattern.chars().zip("START".chars()) {
            assert!(shown == '_' || shown == actual);
        }
    }

    #[test]
    fn short_words_are_never_fully_revealed() {
        let hint = render(HintKind::from_name("pattern"), "at", 1, None);
        assert!(hint.ends_with("A_") || hint.ends_with("_T"), "{hint}");

        let hint = render(HintKind::Smart(SmartHint), "at", 1, None);
        assert_eq!(hint, "Try a 2-letter word starting with 'A'");
    }

    #[test]
    fn definition_without_oracle_falls_back_to_half_word() {
        assert_eq!(
            render(HintKind::from_name("definition"), "start", 2, None),
            "Try a 5-letter word (like 'ST...')"
        );
    }

    #[test]
    fn definition_masks_the_word() {
        let oracle = FakeOracle::default().with_entry("tart", 1.0, Some("a tart, small open pie"));
        assert_eq!(
            render(HintKind::from_name("definition"), "tart", 1, Some(&oracle)),
            "Definition: a ____, small open pie"
        );
    }

    #[test]
    fn smart_adapts_to_height() {
        let early = render(HintKind::Smart(SmartHint), "starts", 2, None);
        assert_eq!(early, "Try a 6-letter word starting with 'ST...'");

        let mid = render(HintKind::Smart(SmartHint), "starts", 5, None);
        assert!(mid.starts_with("Try matching this pattern: "), "{mid}");
        let pattern = mid.rsplit(": ").next().unwrap();
        assert_eq!(pattern.chars().filter(|&c| c != '_').count(), 2);

        let late = render(HintKind::Smart(SmartHint), "starts", 8, None);
        assert_eq!(late, "Try a 6-letter word starting with 'S'");
    }

    #[test]
    fn smart_late_game_may_use_definition() {
        let oracle = FakeOracle::default().with_entry("starts", 1.0, Some("v\tbegins"));
        let candidate = Word::new("starts").unwrap();
        let ctx = HintContext {
            candidate: &candidate,
            height: 9,
            target_length: 6,
            oracle: Some(&oracle),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let hints: Vec<String> = (0..32).map(|_| SmartHint.render(&ctx, &mut rng)).collect();
        assert!(hints.iter().any(|h| h.starts_with("Hint: ")));
        assert!(hints.iter().any(|h| h.contains("starting with 'S'")));
    }

    #[test]
    fn masking_is_case_insensitive_and_unicode_safe() {
        assert_eq!(mask_word("Tart: a TART café", "tart"), "____: a ____ café");
        assert_eq!(mask_word("nothing here", "tart"), "nothing here");
        assert_eq!(mask_word("", "tart"), "");
    }
}
