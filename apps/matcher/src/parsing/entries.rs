//! Per-line classifiers for the experience, education and certification sections.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_EXPERIENCE_ENTRIES: usize = 5;
pub const MAX_EDUCATION_ENTRIES: usize = 3;
pub const MAX_CERTIFICATION_ENTRIES: usize = 5;

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "associate",
    "degree",
    "university",
    "college",
    "institute",
    "school",
    "certification",
    "diploma",
];

const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certified",
    "certification",
    "license",
    "aws",
    "azure",
    "google",
    "microsoft",
    "oracle",
    "cisco",
    "comptia",
    "pmp",
    "scrum",
];

static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}.*\d{4}").unwrap());

// Unanchored on purpose: month names are matched anywhere in the line.
static MONTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)",
    )
    .unwrap()
});

static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}/\d{4}").unwrap());

static FOUR_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

pub fn is_experience_entry(line: &str) -> bool {
    let lower = line.to_lowercase();
    YEAR_RANGE_RE.is_match(line)
        || MONTH_RE.is_match(line)
        || MONTH_YEAR_RE.is_match(line)
        || lower.contains("years")
        || lower.contains("months")
}

pub fn is_education_entry(line: &str) -> bool {
    let lower = line.to_lowercase();
    EDUCATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) || FOUR_DIGITS_RE.is_match(line)
}

pub fn is_certification_entry(line: &str) -> bool {
    let lower = line.to_lowercase();
    CERTIFICATION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Trimmed non-blank lines accepted by `keep`, in document order, capped at `limit`.
pub fn collect_entries(lines: &[&str], keep: fn(&str) -> bool, limit: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && keep(line))
        .take(limit)
        .map(str::to_string)
        .collect()
}
