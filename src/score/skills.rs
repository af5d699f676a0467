use crate::types::report::FeedbackLine;
use crate::types::scoring::{fmt_points, CategoryOutcome, Score, SKILLS_MAX};
use std::collections::BTreeSet;

/// Skills Matcher: substring detection over the skill lexicon. 2.5 points
/// per distinct skill found, capped at 25. A category with fewer than 2
/// matches is flagged as underrepresented in the suggestion.
pub fn score_skills(text: &str, categories: &[(String, Vec<String>)]) -> CategoryOutcome {
    let mut found: BTreeSet<&str> = BTreeSet::new();
    let mut underrepresented: Vec<&str> = Vec::new();

    for (label, terms) in categories {
        let hits: Vec<&str> = terms
            .iter()
            .map(String::as_str)
            .filter(|term| text.contains(*term))
            .collect();
        if hits.len() < 2 {
            underrepresented.push(label.as_str());
        }
        found.extend(hits);
    }

    let score: Score = SKILLS_MAX.min((found.len() as Score / 10.0 * SKILLS_MAX).round());

    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();
    if found.is_empty() {
        feedback.push(FeedbackLine::failure(format!(
            "No technical skills found ({}/25)",
            fmt_points(score)
        )));
        suggestions.push(
            "💡 Add a dedicated 'Technical Skills' section with relevant programming languages, tools, and technologies"
                .to_string(),
        );
    } else {
        let listed = found.iter().copied().collect::<Vec<_>>().join(", ");
        feedback.push(FeedbackLine::success(format!(
            "Technical Skills found: {listed} ({}/25)",
            fmt_points(score)
        )));
        if !underrepresented.is_empty() {
            suggestions.push(format!(
                "💡 Consider adding more skills in these areas: {}",
                underrepresented.join(", ")
            ));
        }
    }

    CategoryOutcome {
        score,
        feedback,
        suggestions,
    }
}
