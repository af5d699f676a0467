use crate::types::report::FeedbackLine;
use crate::types::scoring::{fmt_points, CategoryOutcome, Score, ACTIONS_MAX};
use std::collections::BTreeSet;

const POINTS_PER_WORD: Score = 1.25;

/// Action-Word Analyzer: 1.25 points per per-category hit, capped at 20.
/// A word listed in two categories ("reduced", "increased") scores in both;
/// the displayed union collapses it to one entry.
pub fn score_actions(text: &str, categories: &[(String, Vec<String>)]) -> CategoryOutcome {
    let mut used: BTreeSet<&str> = BTreeSet::new();
    let mut hits_total = 0usize;
    let mut underrepresented: Vec<&str> = Vec::new();

    for (label, words) in categories {
        let hits: Vec<&str> = words
            .iter()
            .map(String::as_str)
            .filter(|word| text.contains(*word))
            .collect();
        hits_total += hits.len();
        if hits.len() < 2 {
            underrepresented.push(label.as_str());
        }
        used.extend(hits);
    }

    let score: Score = ACTIONS_MAX.min(hits_total as Score * POINTS_PER_WORD);

    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();
    if used.is_empty() {
        feedback.push(FeedbackLine::failure(format!(
            "Limited use of action words ({}/20)",
            fmt_points(score)
        )));
        suggestions.push(
            "💡 Use more action verbs to describe your achievements and responsibilities"
                .to_string(),
        );
    } else {
        let listed = used.iter().copied().collect::<Vec<_>>().join(", ");
        feedback.push(FeedbackLine::success(format!(
            "Strong action words used: {listed} ({}/20)",
            fmt_points(score)
        )));
        if !underrepresented.is_empty() {
            suggestions.push(format!(
                "💡 Add more {} action words to strengthen your achievements",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Rubric;
    use crate::types::report::Severity;

    fn score(text: &str) -> CategoryOutcome {
        score_actions(text, &Rubric::default().actions)
    }

    #[test]
    fn single_category_word_scores_one_and_a_quarter() {
        let outcome = score("mentored junior staff");
        assert_eq!(outcome.score, 1.25);
        assert_eq!(
            outcome.feedback[0].text,
            "Strong action words used: mentored (1.25/20)"
        );
    }

    #[test]
    fn overlapping_word_scores_in_both_categories() {
        // "reduced" sits in Achievement and Business: 2 hits, one display
        // entry.
        let outcome = score("reduced onboarding friction");
        assert_eq!(outcome.score, 2.5);
        assert_eq!(
            outcome.feedback[0].text,
            "Strong action words used: reduced (2.5/20)"
        );
    }

    #[test]
    fn no_action_words_yields_failure_line() {
        let outcome = score("responsible for various duties");
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.feedback[0].severity, Severity::Failure);
        assert_eq!(
            outcome.suggestions[0],
            "💡 Use more action verbs to describe your achievements and responsibilities"
        );
    }

    #[test]
    fn score_caps_at_twenty() {
        let text = "led managed directed supervised coordinated mentored \
achieved increased improved optimized enhanced reduced \
developed implemented designed architected engineered programmed \
generated saved streamlined automated";
        let outcome = score(text);
        assert_eq!(outcome.score, ACTIONS_MAX);
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn underrepresented_categories_are_named() {
        let outcome = score("led and mentored the platform team");
        let suggestion = &outcome.suggestions[0];
        assert!(!suggestion.contains("Leadership"));
        assert!(suggestion.contains("Achievement"));
        assert!(suggestion.contains("Technical"));
        assert!(suggestion.contains("Business"));
    }
}
