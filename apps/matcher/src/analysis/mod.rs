//! Compatibility Analyzer: scores a parsed resume against a job requirement.
//!
//! Four sub-scores feed the overall score with equal weight:
//! lexical similarity (Jaccard over token sets), skills coverage with synonym
//! partial credit, years of experience, and education level. The analyzer is
//! pure: same inputs, same `ScoreReport`.

pub mod catalog;
pub mod education;
pub mod experience;
pub mod recommendations;
pub mod skills;
pub mod text;

use tracing::{debug, info, warn};

use crate::analysis::education::education_score;
use crate::analysis::experience::experience_score;
use crate::analysis::recommendations::build_recommendations;
use crate::analysis::skills::{missing_skills, skills_score};
use crate::analysis::text::{lexical_similarity, normalize};
use crate::models::{InputWarning, JobRequirement, ParsedDocument, ScoreReport};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Swappable scoring backend. Implementations must be deterministic and free
/// of shared mutable state so callers can score on any thread.
pub trait CompatibilityScorer: Send + Sync {
    fn score(&self, resume: &ParsedDocument, job: &JobRequirement) -> ScoreReport;

    /// Short label for logs ("rule_based", ...).
    fn backend(&self) -> &'static str;
}

/// Keyword and pattern heuristics; no model, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedScorer;

impl CompatibilityScorer for RuleBasedScorer {
    fn score(&self, resume: &ParsedDocument, job: &JobRequirement) -> ScoreReport {
        compute_report(resume, job)
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

/// Scores `resume` against a job description and its required skills.
pub fn analyze<S: AsRef<str>>(
    resume: &ParsedDocument,
    job_description: &str,
    required_skills: &[S],
) -> ScoreReport {
    let job = JobRequirement::new(job_description, required_skills);
    RuleBasedScorer.score(resume, &job)
}

/// Conditions under which scores fall back to their defaults.
pub fn input_warnings(resume: &ParsedDocument, job: &JobRequirement) -> Vec<InputWarning> {
    let mut warnings = Vec::new();
    if resume.is_blank() {
        warnings.push(InputWarning::EmptyResumeText);
    }
    if job.description.trim().is_empty() {
        warnings.push(InputWarning::EmptyJobDescription);
    }
    if job.required_skills.is_empty() {
        warnings.push(InputWarning::NoRequiredSkills);
    }
    warnings
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring
// ────────────────────────────────────────────────────────────────────────────

fn compute_report(resume: &ParsedDocument, job: &JobRequirement) -> ScoreReport {
    for warning in input_warnings(resume, job) {
        warn!(?warning, "{}", warning.message());
    }

    let resume_text = normalize(&resume.raw_text);
    let job_text = normalize(&job.description);

    let lexical = lexical_similarity(&resume_text, &job_text);
    let skills = skills_score(&resume.skills, &job.required_skills, &job_text);
    let experience = experience_score(&resume.experience, &job_text);
    let education = education_score(&resume.education, &job_text);

    debug!(lexical, skills, experience, education, "Sub-scores computed");

    let missing = missing_skills(&resume.skills, &job.required_skills, &job_text);
    let recommendations = build_recommendations(&missing, skills, experience);

    let report = ScoreReport {
        overall_score: to_percent((lexical + skills + experience + education) / 4.0),
        skills_score: to_percent(skills),
        experience_score: to_percent(experience),
        education_score: to_percent(education),
        missing_skills: missing,
        recommendations,
    };

    info!(
        overall = report.overall_score,
        missing = report.missing_skills.len(),
        "Compatibility analysis complete"
    );

    report
}

fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
