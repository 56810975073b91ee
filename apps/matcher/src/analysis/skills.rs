//! Skills sub-score and missing-skill discovery.

use crate::analysis::catalog::{related_terms, TECH_TERMS};
use crate::analysis::text::normalize;

/// Returned when the job lists no required skills.
pub const DEFAULT_SKILLS_SCORE: f64 = 85.0;
/// Credit for a required skill covered only through a related term.
pub const SYNONYM_CREDIT: f64 = 0.7;
pub const MAX_MISSING_SKILLS: usize = 5;

/// Lowercased, trimmed resume skills with blanks removed.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Substring match in either direction against any resume skill.
fn covered_by(skill: &str, resume_skills: &[String]) -> bool {
    resume_skills
        .iter()
        .any(|r| r.contains(skill) || skill.contains(r.as_str()))
}

/// Percentage of required skills covered by the resume.
///
/// A direct hit earns a full point. Otherwise, if the skill is mentioned in
/// the job text and one of its related terms is on the resume, it earns
/// `SYNONYM_CREDIT`. The total is capped at 100 after summing.
pub fn skills_score(resume_skills: &[String], required_skills: &[String], job_text: &str) -> f64 {
    if required_skills.is_empty() {
        return DEFAULT_SKILLS_SCORE;
    }

    let resume = normalize_skills(resume_skills);
    let mut points = 0.0_f64;

    for skill in required_skills {
        let skill = skill.trim().to_lowercase();

        if covered_by(&skill, &resume) {
            points += 1.0;
            continue;
        }

        if job_text.contains(&normalize(&skill))
            && related_terms(&skill)
                .iter()
                .any(|term| covered_by(term, &resume))
        {
            points += SYNONYM_CREDIT;
        }
    }

    (points / required_skills.len() as f64 * 100.0).min(100.0)
}

/// Required skills the resume does not cover, followed by catalog terms the
/// job text mentions that are neither on the resume nor already listed.
/// At most `MAX_MISSING_SKILLS`, in discovery order.
pub fn missing_skills(
    resume_skills: &[String],
    required_skills: &[String],
    job_text: &str,
) -> Vec<String> {
    let resume = normalize_skills(resume_skills);

    let mut missing: Vec<String> = required_skills
        .iter()
        .filter(|skill| !covered_by(&skill.trim().to_lowercase(), &resume))
        .cloned()
        .collect();

    for &term in TECH_TERMS {
        if !job_text.contains(term) {
            continue;
        }
        let on_resume = resume.iter().any(|r| r.contains(term));
        let listed = missing.iter().any(|m| m.to_lowercase().contains(term));
        if !on_resume && !listed {
            missing.push(term.to_string());
        }
    }

    missing.truncate(MAX_MISSING_SKILLS);
    missing
}
