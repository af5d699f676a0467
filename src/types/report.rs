use crate::types::scoring::Score;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Severity of a feedback line, rendered as the leading marker symbol that
/// downstream presentation maps to a visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Failure,
}

impl Severity {
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Warning => "⚠️",
            Severity::Failure => "❌",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackLine {
    pub severity: Severity,
    pub text: String,
}

impl FeedbackLine {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Failure,
            text: text.into(),
        }
    }
}

impl fmt::Display for FeedbackLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.marker(), self.text)
    }
}

pub const ERROR_CATEGORY: &str = "Error";

/// Full result of one scoring pass: total score, ordered feedback lines,
/// per-category breakdown, and improvement suggestions. Created fresh per
/// call and never mutated after return.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub score: Score,
    pub feedback: Vec<FeedbackLine>,
    pub breakdown: BTreeMap<String, Score>,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quantified_contexts: Vec<String>,
}

impl Analysis {
    /// Sentinel result for empty or whitespace-only input. Callers detect it
    /// via `is_blank_input` or the single error feedback line.
    pub fn blank_input() -> Self {
        let mut breakdown = BTreeMap::new();
        breakdown.insert(ERROR_CATEGORY.to_string(), 0.0);
        Self {
            score: 0.0,
            feedback: vec![FeedbackLine::failure(
                "Error: The document appears to be blank or empty. Please provide a valid resume.",
            )],
            breakdown,
            suggestions: Vec::new(),
            quantified_contexts: Vec::new(),
        }
    }

    pub fn is_blank_input(&self) -> bool {
        self.breakdown.len() == 1 && self.breakdown.get(ERROR_CATEGORY) == Some(&0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_line_renders_with_marker() {
        let line = FeedbackLine::success("Complete contact information found (15/15)");
        assert_eq!(
            line.to_string(),
            "✅ Complete contact information found (15/15)"
        );
    }

    #[test]
    fn blank_input_matches_sentinel_shape() {
        let analysis = Analysis::blank_input();
        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.feedback.len(), 1);
        assert!(analysis.feedback[0].text.contains("Error"));
        assert_eq!(analysis.breakdown.get("Error"), Some(&0.0));
        assert!(analysis.suggestions.is_empty());
        assert!(analysis.is_blank_input());
    }

    #[test]
    fn regular_analysis_is_not_blank_sentinel() {
        let mut analysis = Analysis::blank_input();
        analysis.breakdown.clear();
        analysis.breakdown.insert("Technical Skills".to_string(), 0.0);
        assert!(!analysis.is_blank_input());
    }
}
