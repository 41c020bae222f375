//! Tower scoring
//!
//! Score = Σ (word length × level) + uncommon-letter bonus + speed bonus.
//! Taller levels are worth more per letter, which rewards sustained towers.

use serde::Serialize;

/// Scoring constants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRules {
    /// Letters that earn a bonus each time they appear
    pub uncommon_letters: Vec<char>,
    /// Points per uncommon letter occurrence
    pub uncommon_bonus: u32,
    /// Finishing strictly faster than this earns the speed bonus
    pub speed_threshold_secs: u64,
    /// Speed bonus as a percentage of base + letter points (rounded down)
    pub speed_bonus_percent: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            uncommon_letters: vec!['q', 'z', 'x', 'j', 'k'],
            uncommon_bonus: 5,
            speed_threshold_secs: 300,
            speed_bonus_percent: 10,
        }
    }
}

/// Points earned by one tower level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelScore {
    /// 1-based level (the starting word is level 1)
    pub level: usize,
    pub word: String,
    pub length: usize,
    pub multiplier: usize,
    pub base_points: u32,
    pub letter_bonus: u32,
}

/// Full score of a tower
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub total_score: u32,
    pub base_score: u32,
    pub letter_bonus: u32,
    pub speed_bonus: u32,
    pub height: usize,
    pub time_seconds: Option<u64>,
    pub breakdown: Vec<LevelScore>,
}

impl ScoreRules {
    fn letter_bonus(&self, word: &str) -> u32 {
        let uncommon = word
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| self.uncommon_letters.contains(c))
            .count() as u32;
        uncommon * self.uncommon_bonus
    }

    /// Score a tower, bottom word first
    ///
    /// `elapsed_seconds` is the time taken to build it, if known; the speed
    /// bonus only applies when it is known and under the threshold.
    #[must_use]
    pub fn score_tower<S: AsRef<str>>(&self, tower: &[S], elapsed_seconds: Option<u64>) -> ScoreBreakdown {
        if tower.is_empty() {
            return ScoreBreakdown {
                time_seconds: elapsed_seconds,
                ..ScoreBreakdown::default()
            };
        }

        let breakdown: Vec<LevelScore> = tower
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let word = word.as_ref();
                let level = i + 1;
                let length = word.chars().count();
                LevelScore {
                    level,
                    word: word.to_string(),
                    length,
                    multiplier: level,
                    base_points: (length * level) as u32,
                    letter_bonus: self.letter_bonus(word),
                }
            })
            .collect();

        let base_score: u32 = breakdown.iter().map(|l| l.base_points).sum();
        let letter_bonus: u32 = breakdown.iter().map(|l| l.letter_bonus).sum();

        let speed_bonus = match elapsed_seconds {
            Some(secs) if secs < self.speed_threshold_secs => {
                (base_score + letter_bonus) * self.speed_bonus_percent / 100
            }
            _ => 0,
        };

        ScoreBreakdown {
            total_score: base_score + letter_bonus + speed_bonus,
            base_score,
            letter_bonus,
            speed_bonus,
            height: tower.len(),
            time_seconds: elapsed_seconds,
            breakdown,
        }
    }
}

/// Score a tower with the default rules
///
/// # Examples
/// ```
/// use word_tower::scoring::score_tower;
///
/// let score = score_tower(&["art", "tart", "start"], None);
/// assert_eq!(score.base_score, 3 * 1 + 4 * 2 + 5 * 3);
/// assert_eq!(score.total_score, 26);
/// ```
#[must_use]
pub fn score_tower<S: AsRef<str>>(tower: &[S], elapsed_seconds: Option<u64>) -> ScoreBreakdown {
    ScoreRules::default().score_tower(tower, elapsed_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tower_scores_zero() {
        let score = score_tower::<&str>(&[], None);
        assert_eq!(score.total_score, 0);
        assert_eq!(score.base_score, 0);
        assert_eq!(score.letter_bonus, 0);
        assert_eq!(score.speed_bonus, 0);
        assert_eq!(score.height, 0);
        assert!(score.breakdown.is_empty());
    }

    #[test]
    fn empty_tower_scores_zero_even_when_fast() {
        let score = score_tower::<&str>(&[], Some(10));
        assert_eq!(score.total_score, 0);
        assert_eq!(score.speed_bonus, 0);
    }

    #[test]
    fn length_times_level() {
        let score = score_tower(&["art", "tart", "start"], None);
        assert_eq!(score.base_score, 26);
        assert_eq!(score.letter_bonus, 0);
        assert_eq!(score.speed_bonus, 0);
        assert_eq!(score.total_score, 26);
        assert_eq!(score.height, 3);
    }

    #[test]
    fn per_level_breakdown() {
        let score = score_tower(&["art", "tart"], None);
        assert_eq!(
            score.breakdown[1],
            LevelScore {
                level: 2,
                word: "tart".to_string(),
                length: 4,
                multiplier: 2,
                base_points: 8,
                letter_bonus: 0,
            }
        );
    }

    #[test]
    fn uncommon_letters_earn_bonus() {
        let score = score_tower(&["fox"], None);
        assert_eq!(score.letter_bonus, 5);
        assert_eq!(score.total_score, 3 + 5);

        // Every occurrence counts
        let score = score_tower(&["jazz"], None);
        assert_eq!(score.letter_bonus, 15);
    }

    #[test]
    fn speed_bonus_is_ten_percent_rounded_down() {
        let score = score_tower(&["art", "tart", "start"], Some(200));
        assert_eq!(score.speed_bonus, 2);
        assert_eq!(score.total_score, 28);
        assert_eq!(score.time_seconds, Some(200));
    }

    #[test]
    fn fast_beats_slow() {
        let tower = ["art", "tart", "start"];
        let fast = score_tower(&tower, Some(200));
        let slow = score_tower(&tower, Some(400));
        assert!(fast.total_score > slow.total_score);
        assert_eq!(slow.speed_bonus, 0);
    }

    #[test]
    fn threshold_is_exclusive() {
        let tower = ["art", "tart", "start"];
        assert_eq!(score_tower(&tower, Some(299)).speed_bonus, 2);
        assert_eq!(score_tower(&tower, Some(300)).speed_bonus, 0);
        assert_eq!(score_tower(&tower, None).speed_bonus, 0);
    }

    #[test]
    fn scoring_is_stable() {
        let tower = ["fox", "oxen"];
        assert_eq!(score_tower(&tower, Some(42)), score_tower(&tower, Some(42)));
    }

    #[test]
    fn custom_rules() {
        let rules = ScoreRules {
            uncommon_letters: vec!['t'],
            uncommon_bonus: 1,
            ..ScoreRules::default()
        };
        let score = rules.score_tower(&["tart"], None);
        assert_eq!(score.letter_bonus, 2);
    }
}
