use serde::{Deserialize, Serialize};

/// Compatibility result for one resume against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub overall_score: u8,            // 0 – 100
    pub skills_score: u8,             // 0 – 100
    pub experience_score: u8,         // 0 – 100
    pub education_score: u8,          // 0 – 100
    pub missing_skills: Vec<String>,  // ≤ 5
    pub recommendations: Vec<String>, // ≤ 4
}

/// Coarse banding of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            MatchTier::High
        } else if score >= 60 {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::High => "High Match",
            MatchTier::Medium => "Medium Match",
            MatchTier::Low => "Low Match",
        }
    }
}

impl ScoreReport {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.overall_score)
    }
}

/// Degraded-input conditions. Scoring still succeeds and falls back to the
/// default sub-scores; these only explain why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputWarning {
    EmptyResumeText,
    EmptyJobDescription,
    NoRequiredSkills,
}

impl InputWarning {
    pub fn message(self) -> &'static str {
        match self {
            InputWarning::EmptyResumeText => "Resume text is empty; section scores use defaults",
            InputWarning::EmptyJobDescription => {
                "Job description is empty; requirement-based scores use defaults"
            }
            InputWarning::NoRequiredSkills => {
                "No required skills supplied; skills score uses the default"
            }
        }
    }
}
