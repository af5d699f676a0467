//! Static lexicons and pattern sets backing the scoring rubric.
//!
//! Lexicons are literal keyword sets matched as substrings of the lowercased
//! document text; pattern sets are compiled regexes for structural detection.
//! Both are module-scoped constant tables so scoring logic stays free of
//! embedded literals and the rubric can be extended via config.

use crate::config::AtsConfig;
use once_cell::sync::Lazy;
use regex::Regex;

pub struct LexiconCategory {
    pub label: &'static str,
    pub terms: &'static [&'static str],
}

/// Skill categories for the Skills Matcher (25 points).
pub static SKILL_LEXICON: &[LexiconCategory] = &[
    LexiconCategory {
        label: "Programming",
        terms: &[
            "python",
            "java",
            "c++",
            "javascript",
            "typescript",
            "ruby",
            "php",
            "swift",
            "kotlin",
            "go",
            "rust",
        ],
    },
    LexiconCategory {
        label: "Web",
        terms: &[
            "html", "css", "react", "angular", "vue", "node.js", "django", "flask", "spring",
            "express",
        ],
    },
    LexiconCategory {
        label: "Data",
        terms: &[
            "sql",
            "mysql",
            "postgresql",
            "mongodb",
            "nosql",
            "data analysis",
            "data science",
            "machine learning",
            "ai",
            "tensorflow",
            "pytorch",
        ],
    },
    LexiconCategory {
        label: "DevOps",
        terms: &[
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "gcp",
            "ci/cd",
            "jenkins",
            "git",
            "linux",
        ],
    },
    LexiconCategory {
        label: "Tools",
        terms: &["jira", "agile", "scrum", "excel", "power bi", "tableau"],
    },
];

/// Action-verb categories for the Action-Word Analyzer (20 points).
/// "reduced" and "increased" intentionally appear in two categories and are
/// scored once per category.
pub static ACTION_LEXICON: &[LexiconCategory] = &[
    LexiconCategory {
        label: "Leadership",
        terms: &[
            "led",
            "managed",
            "directed",
            "supervised",
            "coordinated",
            "mentored",
        ],
    },
    LexiconCategory {
        label: "Achievement",
        terms: &[
            "achieved",
            "increased",
            "improved",
            "optimized",
            "enhanced",
            "reduced",
        ],
    },
    LexiconCategory {
        label: "Technical",
        terms: &[
            "developed",
            "implemented",
            "designed",
            "architected",
            "engineered",
            "programmed",
        ],
    },
    LexiconCategory {
        label: "Business",
        terms: &[
            "generated",
            "saved",
            "reduced",
            "increased",
            "streamlined",
            "automated",
        ],
    },
];

/// Fallback for the "skills" section: found when at least 3 of these common
/// technology keywords occur even without a heading.
pub static SKILL_SECTION_FALLBACK: &[&str] = &[
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "sql",
    "react",
    "angular",
    "node",
    "aws",
];

/// Fallback for the "education" section: any degree or institution mention
/// counts even without a heading.
pub static EDUCATION_INDICATORS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "b.s.",
    "m.s.",
    "b.e.",
    "m.e.",
    "b.tech",
    "m.tech",
    "university",
    "college",
];

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("static pattern is valid")
}

/// Heading regexes for the Section Detector, anchored at start-of-text or a
/// newline. Declaration order is the reporting order for missing sections.
pub static SECTION_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        (
            "education",
            pattern(r"(?i)(?:^|\n)\s*(?:education|academic|qualification|degree|university|college|bachelor|master|phd|b\.?s\.?|m\.?s\.?|b\.?e\.?|m\.?e\.?|b\.?tech|m\.?tech)[\s:]*"),
        ),
        (
            "experience",
            pattern(r"(?i)(?:^|\n)\s*(?:experience|work history|employment|professional experience|work experience|job history|career|professional background|work background)[\s:]*"),
        ),
        (
            "projects",
            pattern(r"(?i)(?:^|\n)\s*(?:projects|portfolio|work samples|case studies|project experience|project work|project history|project portfolio|project showcase)[\s:]*"),
        ),
        (
            "skills",
            pattern(r"(?i)(?:^|\n)\s*(?:skills|technical skills|competencies|expertise|technical expertise|core competencies|key skills|technical competencies|skill set|areas of expertise)[\s:]*"),
        ),
        (
            "certifications",
            pattern(r"(?i)(?:^|\n)\s*(?:certifications|certificates|accreditations|professional certifications|technical certifications|industry certifications|certified|accredited)[\s:]*"),
        ),
        (
            "summary",
            pattern(r"(?i)(?:^|\n)\s*(?:summary|profile|objective|about me|career summary|professional summary|executive summary|career objective|professional profile)[\s:]*"),
        ),
        (
            "achievements",
            pattern(r"(?i)(?:^|\n)\s*(?:achievements|accomplishments|awards|recognition|honors|distinctions|merits|successes|milestones|key achievements)[\s:]*"),
        ),
    ]
});

/// Contact patterns for the Contact Extractor, 3 points each. Declaration
/// order is the reporting order for missing items.
pub static CONTACT_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("email", pattern(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")),
        (
            "phone",
            pattern(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"),
        ),
        ("github", pattern(r"github\.com/[a-zA-Z0-9-]+")),
        ("linkedin", pattern(r"linkedin\.com/in/[a-zA-Z0-9-]+")),
        (
            "portfolio",
            pattern(r"(?:portfolio|website|personal site)[:\s]+(?:https?://)?[^\s]+"),
        ),
    ]
});

/// Numeric-metric patterns for the Quantification Detector: percentages,
/// dollar amounts, count-with-unit, growth/change, and duration phrases.
pub static QUANTIFIED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        pattern(r"\d+(?:\.\d+)?%"),
        pattern(r"\$\d+(?:,\d+)*(?:\.\d+)?"),
        pattern(r"\d+(?:,\d+)*(?:\.\d+)?\s*(?:users|customers|clients|employees)"),
        pattern(r"\d+(?:,\d+)*(?:\.\d+)?\s*(?:increase|decrease|reduction|growth)"),
        pattern(r"\d+(?:,\d+)*(?:\.\d+)?\s*(?:days|weeks|months|years)"),
    ]
});

/// Lexicon portion of the rubric, owned so config extras can extend the
/// built-in categories without touching scoring logic. Pattern sets stay
/// static; only keyword sets are extensible.
#[derive(Debug, Clone)]
pub struct Rubric {
    pub skills: Vec<(String, Vec<String>)>,
    pub actions: Vec<(String, Vec<String>)>,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            skills: owned_categories(SKILL_LEXICON),
            actions: owned_categories(ACTION_LEXICON),
        }
    }
}

impl Rubric {
    /// Built-in rubric extended with `[skills.extra]` / `[actions.extra]`
    /// terms from config. Extras are lowercased (the document text is) and
    /// duplicates of built-in terms are dropped.
    pub fn with_config(config: &AtsConfig) -> Self {
        let mut rubric = Self::default();
        merge_extras(&mut rubric.skills, &config.skill_extras());
        merge_extras(&mut rubric.actions, &config.action_extras());
        rubric
    }
}

fn owned_categories(lexicon: &[LexiconCategory]) -> Vec<(String, Vec<String>)> {
    lexicon
        .iter()
        .map(|category| {
            (
                category.label.to_string(),
                category.terms.iter().map(|term| term.to_string()).collect(),
            )
        })
        .collect()
}

fn merge_extras(categories: &mut [(String, Vec<String>)], extras: &[(String, Vec<String>)]) {
    for (label, terms) in extras {
        if let Some((_, existing)) = categories
            .iter_mut()
            .find(|(existing_label, _)| existing_label == label)
        {
            for term in terms {
                let term = term.trim().to_lowercase();
                if !term.is_empty() && !existing.contains(&term) {
                    existing.push(term);
                }
            }
        }
    }
}
