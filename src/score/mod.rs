pub mod actions;
pub mod contact;
pub mod quantified;
pub mod sections;
pub mod skills;

use crate::lexicon::Rubric;
use crate::types::report::Analysis;
use crate::types::scoring::CategoryOutcome;
use std::collections::BTreeMap;
use tracing::debug;

pub const SKILLS_CATEGORY: &str = "Technical Skills";
pub const SECTIONS_CATEGORY: &str = "Resume Sections";
pub const CONTACT_CATEGORY: &str = "Contact Info";
pub const ACTIONS_CATEGORY: &str = "Action Words";
pub const QUANTIFIED_CATEGORY: &str = "Quantified Results";

/// Runs the five sub-scorers over `text` and aggregates their outcomes.
/// Pure and idempotent: the result is a function of the text and the rubric
/// alone. Empty or whitespace-only input short-circuits to the blank-input
/// sentinel before any sub-scorer runs.
pub fn analyze(text: &str, rubric: &Rubric) -> Analysis {
    if text.trim().is_empty() {
        return Analysis::blank_input();
    }

    let skills = skills::score_skills(text, &rubric.skills);
    let sections = sections::score_sections(text);
    let contact = contact::score_contact(text);
    let actions = actions::score_actions(text, &rubric.actions);
    let (quantified, quantified_contexts) = quantified::score_quantified(text);

    let total = skills.score + sections.score + contact.score + actions.score + quantified.score;
    debug!(
        total,
        skills = skills.score,
        sections = sections.score,
        contact = contact.score,
        actions = actions.score,
        quantified = quantified.score,
        "scoring pass complete"
    );

    let mut breakdown = BTreeMap::new();
    breakdown.insert(SKILLS_CATEGORY.to_string(), skills.score);
    breakdown.insert(SECTIONS_CATEGORY.to_string(), sections.score);
    breakdown.insert(CONTACT_CATEGORY.to_string(), contact.score);
    breakdown.insert(ACTIONS_CATEGORY.to_string(), actions.score);
    breakdown.insert(QUANTIFIED_CATEGORY.to_string(), quantified.score);

    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();
    for outcome in [&skills, &sections, &contact, &actions, &quantified] {
        let CategoryOutcome {
            feedback: lines,
            suggestions: hints,
            ..
        } = outcome;
        feedback.extend(lines.iter().cloned());
        suggestions.extend(hints.iter().cloned());
    }
    suggestions.push(overall_suggestion(total).to_string());

    Analysis {
        score: total,
        feedback,
        breakdown,
        suggestions,
        quantified_contexts,
    }
}

/// Scores with the built-in rubric.
pub fn analyze_text(text: &str) -> Analysis {
    analyze(text, &Rubric::default())
}

fn overall_suggestion(total: f32) -> &'static str {
    if total < 60.0 {
        "💡 Consider a complete resume overhaul focusing on adding missing sections and quantifying achievements"
    } else if total < 80.0 {
        "💡 Your resume is good but could be improved by adding more quantified results and technical skills"
    } else {
        "💡 Great resume! Consider adding more industry-specific keywords to improve ATS matching"
    }
}
