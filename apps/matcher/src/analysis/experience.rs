//! Experience sub-score: years the job asks for vs. years the resume claims.

use once_cell::sync::Lazy;
use regex::Regex;

/// Resume has no experience entries.
pub const NO_EXPERIENCE_SCORE: f64 = 60.0;
/// Either side has no extractable year count.
pub const BASE_EXPERIENCE_SCORE: f64 = 70.0;

static YEARS_OF_EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)[+\-\s]*years?\s*(?:of\s*)?experience").unwrap()
});
static YRS_OF_EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)[+\-\s]*yrs?\s*(?:of\s*)?experience").unwrap());
static YRS_EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)[+\-\s]*yrs?\s*experience").unwrap());
static MINIMUM_YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)minimum\s*(\d+)\s*years?").unwrap());
static AT_LEAST_YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)at\s*least\s*(\d+)\s*years?").unwrap());

/// First pattern (in priority order) that matches anywhere wins.
/// A zero count is treated as no count.
fn first_year_count(text: &str, patterns: &[&Regex]) -> Option<u32> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps[1].parse::<u32>().ok())
    })
    .filter(|&years| years > 0)
}

/// Years of experience a job description asks for.
pub fn required_years(job_text: &str) -> Option<u32> {
    first_year_count(
        job_text,
        &[
            &YEARS_OF_EXPERIENCE_RE,
            &YRS_OF_EXPERIENCE_RE,
            &MINIMUM_YEARS_RE,
            &AT_LEAST_YEARS_RE,
        ],
    )
}

/// Years of experience a resume claims.
pub fn candidate_years(resume_text: &str) -> Option<u32> {
    first_year_count(resume_text, &[&YEARS_OF_EXPERIENCE_RE, &YRS_EXPERIENCE_RE])
}

pub fn experience_score(resume_experience: &[String], job_text: &str) -> f64 {
    if resume_experience.is_empty() {
        return NO_EXPERIENCE_SCORE;
    }

    let required = required_years(job_text);
    let candidate = candidate_years(&resume_experience.join(" "));
    tracing::debug!(?required, ?candidate, "Experience years extracted");

    match (required, candidate) {
        (Some(required), Some(candidate)) if candidate >= required => 90.0,
        (Some(required), Some(candidate)) if candidate + 1 >= required => 80.0,
        (Some(_), Some(_)) => 60.0,
        _ => BASE_EXPERIENCE_SCORE,
    }
}
