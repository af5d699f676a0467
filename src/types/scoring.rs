use crate::types::report::FeedbackLine;

pub type Score = f32;

/// Per-category rubric caps. Their sum bounds the total at 100, so no
/// additional clamp is applied at the aggregate level.
pub const SKILLS_MAX: Score = 25.0;
pub const SECTIONS_MAX: Score = 20.0;
pub const CONTACT_MAX: Score = 15.0;
pub const ACTIONS_MAX: Score = 20.0;
pub const QUANTIFIED_MAX: Score = 20.0;

/// Result of one sub-scorer: its awarded points plus the feedback lines and
/// suggestions it derived from them.
#[derive(Debug, Clone, Default)]
pub struct CategoryOutcome {
    pub score: Score,
    pub feedback: Vec<FeedbackLine>,
    pub suggestions: Vec<String>,
}

/// Formats a point value the way the rubric reports it: integral values
/// without a decimal part, fractional values (action words step in 1.25)
/// as-is.
pub fn fmt_points(score: Score) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    }
}
