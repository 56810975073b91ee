//! Education sub-score: highest degree on the resume vs. highest degree the job mentions.

use crate::analysis::catalog::EDUCATION_LEVELS;

/// Resume has no education entries.
pub const NO_EDUCATION_SCORE: f64 = 70.0;
/// Job mentions no degree level.
pub const NO_REQUIREMENT_SCORE: f64 = 85.0;

/// Highest level whose keyword occurs in `lower_text`, or 0.
pub fn education_level(lower_text: &str) -> u8 {
    EDUCATION_LEVELS
        .iter()
        .filter(|(keyword, _)| lower_text.contains(keyword))
        .map(|&(_, level)| level)
        .max()
        .unwrap_or(0)
}

pub fn education_score(resume_education: &[String], job_text: &str) -> f64 {
    if resume_education.is_empty() {
        return NO_EDUCATION_SCORE;
    }

    let candidate = resume_education
        .iter()
        .map(|entry| education_level(&entry.to_lowercase()))
        .max()
        .unwrap_or(0);
    let required = education_level(&job_text.to_lowercase());
    tracing::debug!(candidate, required, "Education levels extracted");

    if required == 0 {
        NO_REQUIREMENT_SCORE
    } else if candidate >= required {
        95.0
    } else if candidate + 1 == required {
        80.0
    } else {
        65.0
    }
}
