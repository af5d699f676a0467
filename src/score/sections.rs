use crate::lexicon::{EDUCATION_INDICATORS, SECTION_PATTERNS, SKILL_SECTION_FALLBACK};
use crate::types::report::FeedbackLine;
use crate::types::scoring::{fmt_points, CategoryOutcome, Score, SECTIONS_MAX};

/// Section Detector: a section counts as found when its heading regex
/// matches, with lexicon fallbacks for "skills" (3+ common technology
/// keywords) and "education" (any degree/institution indicator).
/// `score = round(found / 7 * 20)`.
pub fn score_sections(text: &str) -> CategoryOutcome {
    let mut found: Vec<&str> = Vec::new();
    for (name, heading) in SECTION_PATTERNS.iter() {
        let hit = heading.is_match(text)
            || match *name {
                "skills" => {
                    SKILL_SECTION_FALLBACK
                        .iter()
                        .filter(|keyword| text.contains(**keyword))
                        .count()
                        >= 3
                }
                "education" => EDUCATION_INDICATORS
                    .iter()
                    .any(|indicator| text.contains(*indicator)),
                _ => false,
            };
        if hit {
            found.push(*name);
        }
    }

    let score: Score =
        (found.len() as Score / SECTION_PATTERNS.len() as Score * SECTIONS_MAX).round();

    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();
    if score == SECTIONS_MAX {
        feedback.push(FeedbackLine::success(format!(
            "All essential sections found ({}/20)",
            fmt_points(score)
        )));
    } else {
        // missing sections reported in pattern-declaration order
        let missing: Vec<&str> = SECTION_PATTERNS
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !found.contains(name))
            .collect();
        feedback.push(FeedbackLine::warning(format!(
            "Found {}/7 sections ({}/20)",
            found.len(),
            fmt_points(score)
        )));
        if !missing.is_empty() {
            let listed = missing.join(", ");
            feedback.push(FeedbackLine::failure(format!("Missing sections: {listed}")));
            suggestions.push(format!("💡 Add these missing sections: {listed}"));
        }
    }

    CategoryOutcome {
        score,
        feedback,
        suggestions,
    }
}
