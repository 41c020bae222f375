//! Command implementations

pub mod check;
pub mod climb;
pub mod hint;
pub mod score;
pub mod simple;
pub mod survey;

pub use check::{CheckResult, check_pair};
pub use climb::{ClimbResult, climb};
pub use hint::hint_for;
pub use score::{parse_tower, score_words};
pub use simple::run_simple;
pub use survey::{SurveyResult, run_survey};
