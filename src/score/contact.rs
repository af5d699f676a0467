use crate::lexicon::CONTACT_PATTERNS;
use crate::types::report::FeedbackLine;
use crate::types::scoring::{fmt_points, CategoryOutcome, Score, CONTACT_MAX};

const POINTS_PER_PATTERN: Score = 3.0;

/// Contact Extractor: each of the five contact patterns found anywhere in
/// the text contributes a fixed 3 points (max 15). Missing items are named
/// in pattern-definition order.
pub fn score_contact(text: &str) -> CategoryOutcome {
    let mut score: Score = 0.0;
    let mut missing: Vec<&str> = Vec::new();
    for (item, pattern) in CONTACT_PATTERNS.iter() {
        if pattern.is_match(text) {
            score += POINTS_PER_PATTERN;
        } else {
            missing.push(*item);
        }
    }

    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();
    if score == CONTACT_MAX {
        feedback.push(FeedbackLine::success(format!(
            "Complete contact information found ({}/15)",
            fmt_points(score)
        )));
    } else {
        feedback.push(FeedbackLine::warning(format!(
            "Contact information partially complete ({}/15)",
            fmt_points(score)
        )));
        if !missing.is_empty() {
            suggestions.push(format!(
                "💡 Add your {} to make it easier for recruiters to contact you",
                missing.join(", ")
            ));
        }
    }

    CategoryOutcome {
        score,
        feedback,
        suggestions,
    }
}
