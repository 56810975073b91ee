//! Heading-keyword section finder.
//!
//! A single forward scan per section: the first line containing one of the
//! section's heading synonyms opens it, and the first later non-blank line
//! that mentions another section's keyword closes it.

use serde::{Deserialize, Serialize};

/// Keywords that end whatever section is currently open.
const BOUNDARY_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "certifications",
    "projects",
    "awards",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Skills,
    Experience,
    Education,
    Certifications,
}

impl SectionKind {
    pub fn headings(self) -> &'static [&'static str] {
        match self {
            SectionKind::Skills => &["skills", "technical skills", "technologies", "expertise"],
            SectionKind::Experience => &["experience", "work experience", "employment", "career"],
            SectionKind::Education => &["education", "academic background", "qualifications"],
            SectionKind::Certifications => &["certifications", "certificates", "licenses"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    InSection,
}

/// Body lines of the section, or `None` when no heading line exists.
///
/// Text after a colon on the heading line ("Skills: Rust, Go") counts as the
/// first body line.
pub fn find_section(text: &str, kind: SectionKind) -> Option<Vec<&str>> {
    let headings = kind.headings();
    let mut state = ScanState::Searching;
    let mut body = Vec::new();

    for line in text.split('\n') {
        let lower = line.trim().to_lowercase();

        match state {
            ScanState::Searching => {
                if contains_any(&lower, headings) {
                    state = ScanState::InSection;
                    if let Some(inline) = inline_content(line, headings) {
                        body.push(inline);
                    }
                }
            }
            ScanState::InSection => {
                if ends_section(&lower, headings) {
                    break;
                }
                body.push(line);
            }
        }
    }

    match state {
        ScanState::Searching => None,
        ScanState::InSection => Some(body),
    }
}

fn ends_section(lower: &str, headings: &[&str]) -> bool {
    !lower.is_empty()
        && BOUNDARY_KEYWORDS
            .iter()
            .any(|kw| lower.contains(kw) && !contains_any(lower, headings))
}

fn inline_content<'a>(line: &'a str, headings: &[&str]) -> Option<&'a str> {
    let (label, rest) = line.trim().split_once(':')?;
    let rest = rest.trim();
    if rest.is_empty() || !contains_any(&label.to_lowercase(), headings) {
        return None;
    }
    Some(rest)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
