use crate::types::report::Analysis;
use crate::types::scoring::fmt_points;

pub fn to_markdown(analysis: &Analysis) -> String {
    let mut output = String::new();
    output.push_str("# Resume ATS Report\n\n");
    output.push_str(&format!(
        "Overall score: {}/100\n\n",
        fmt_points(analysis.score)
    ));

    output.push_str("## Score Breakdown\n\n");
    for (category, points) in &analysis.breakdown {
        output.push_str(&format!("- {category}: {}\n", fmt_points(*points)));
    }
    output.push('\n');

    output.push_str("## Detailed Feedback\n\n");
    for line in &analysis.feedback {
        output.push_str(&format!("- {line}\n"));
    }
    output.push('\n');

    output.push_str("## Suggestions\n\n");
    if analysis.suggestions.is_empty() {
        output.push_str("- none\n");
    } else {
        for suggestion in &analysis.suggestions {
            output.push_str(&format!("- {suggestion}\n"));
        }
    }

    output
}
