use crate::lexicon::QUANTIFIED_PATTERNS;
use crate::types::report::FeedbackLine;
use crate::types::scoring::{fmt_points, CategoryOutcome, Score, QUANTIFIED_MAX};

const POINTS_PER_MATCH: Score = 4.0;
const CONTEXT_RADIUS: usize = 50;

/// Quantification Detector: every match of every metric pattern contributes
/// 4 points (capped at 20) and a trimmed context window of up to 50
/// characters on each side. Patterns run independently, so the same span can
/// be captured by more than one family.
pub fn score_quantified(text: &str) -> (CategoryOutcome, Vec<String>) {
    let contexts = find_quantified(text);
    let score: Score = QUANTIFIED_MAX.min(contexts.len() as Score * POINTS_PER_MATCH);

    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();
    if contexts.is_empty() {
        feedback.push(FeedbackLine::failure(format!(
            "No quantified results found ({}/20)",
            fmt_points(score)
        )));
        suggestions.push(
            "💡 Add specific numbers and metrics to quantify your achievements (e.g., 'increased efficiency by 25%', 'managed team of 10 developers')"
                .to_string(),
        );
    } else {
        feedback.push(FeedbackLine::success(format!(
            "Found {} quantified results ({}/20)",
            contexts.len(),
            fmt_points(score)
        )));
    }

    (
        CategoryOutcome {
            score,
            feedback,
            suggestions,
        },
        contexts,
    )
}

/// Context windows around every metric match, clamped to text bounds.
pub fn find_quantified(text: &str) -> Vec<String> {
    let mut contexts = Vec::new();
    for pattern in QUANTIFIED_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            let mut start = found.start().saturating_sub(CONTEXT_RADIUS);
            // window edges must land on char boundaries
            while !text.is_char_boundary(start) {
                start -= 1;
            }
            let mut end = usize::min(found.end() + CONTEXT_RADIUS, text.len());
            while !text.is_char_boundary(end) {
                end += 1;
            }
            contexts.push(text[start..end].trim().to_string());
        }
    }
    contexts
}
