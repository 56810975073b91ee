use serde::{Deserialize, Serialize};

use crate::parsing::skills::match_skill_catalog;

/// What the job asks for, supplied by the caller per analysis request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirement {
    pub description: String,
    /// Trimmed, non-blank, case-insensitively unique. First spelling wins.
    pub required_skills: Vec<String>,
}

impl JobRequirement {
    pub fn new<I, S>(description: impl Into<String>, required_skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skills: Vec<String> = Vec::new();
        let mut seen: Vec<String> = Vec::new();
        for skill in required_skills {
            let skill = skill.as_ref().trim();
            if skill.is_empty() {
                continue;
            }
            // Same folding the analyzer applies when matching.
            let folded = skill.to_lowercase();
            if seen.contains(&folded) {
                continue;
            }
            seen.push(folded);
            skills.push(skill.to_string());
        }

        JobRequirement {
            description: description.into(),
            required_skills: skills,
        }
    }

    /// Fills an empty skill list from the description using the skill catalog.
    /// A non-empty list is left untouched.
    pub fn with_inferred_skills(mut self) -> Self {
        if self.required_skills.is_empty() {
            self.required_skills = match_skill_catalog(&self.description);
            tracing::debug!(
                inferred = self.required_skills.len(),
                "Inferred required skills from job description"
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_drops_blank_skills() {
        let job = JobRequirement::new("desc", ["  Rust ", "", "   ", "Go"]);
        assert_eq!(job.required_skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_new_dedups_case_insensitively() {
        let job = JobRequirement::new("desc", ["React", "react", "REACT", "Vue"]);
        assert_eq!(job.required_skills, vec!["React", "Vue"]);
    }

    #[test]
    fn test_new_dedups_non_ascii_case() {
        let job = JobRequirement::new("desc", ["Ñode", "ñode", "ÑODE", "Straße"]);
        assert_eq!(job.required_skills, vec!["Ñode", "Straße"]);
    }

    #[test]
    fn test_inference_uses_catalog_order() {
        let job = JobRequirement::new(
            "We need Docker and Python. Kubernetes is a plus.",
            Vec::<String>::new(),
        )
        .with_inferred_skills();
        assert_eq!(job.required_skills, vec!["Python", "Docker", "Kubernetes"]);
    }

    #[test]
    fn test_inference_keeps_explicit_skills() {
        let job = JobRequirement::new("Python and Docker", ["Rust"]).with_inferred_skills();
        assert_eq!(job.required_skills, vec!["Rust"]);
    }
}
