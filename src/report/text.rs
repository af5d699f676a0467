use crate::types::report::Analysis;
use crate::types::scoring::fmt_points;

/// Plain-text feedback report, the downloadable format: score header, a
/// "Detailed Feedback" section, and an "AI-Powered Suggestions" section,
/// separated by blank lines.
pub fn to_text(analysis: &Analysis) -> String {
    let mut content = format!(
        "ATS Score: {}/100\n\nDetailed Feedback:\n",
        fmt_points(analysis.score)
    );
    content.push_str(
        &analysis
            .feedback
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    );
    content.push_str("\n\nAI-Powered Suggestions:\n");
    content.push_str(&analysis.suggestions.join("\n"));
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::analyze_text;

    #[test]
    fn report_has_header_and_both_sections() {
        let analysis = analyze_text("skills\npython, java, sql\n");
        let rendered = to_text(&analysis);
        assert!(rendered.starts_with("ATS Score: "));
        assert!(rendered.contains("/100\n\nDetailed Feedback:\n"));
        assert!(rendered.contains("\n\nAI-Powered Suggestions:\n"));
    }

    #[test]
    fn feedback_lines_carry_their_markers() {
        let analysis = analyze_text("skills\npython, java, sql\n");
        let rendered = to_text(&analysis);
        assert!(rendered.contains("✅ Technical Skills found: java, python, sql (8/25)"));
        assert!(rendered.contains("❌"));
    }

    #[test]
    fn blank_input_report_contains_single_error_line() {
        let analysis = analyze_text("  ");
        let rendered = to_text(&analysis);
        assert!(rendered.starts_with("ATS Score: 0/100"));
        assert!(rendered.contains("❌ Error:"));
        // no suggestions for blank input
        assert!(rendered.ends_with("AI-Powered Suggestions:\n"));
    }
}
