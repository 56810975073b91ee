/// Upper bound on the number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 4;

const HIGHLIGHT_SKILLS: &str = "Highlight more relevant technical skills in your resume";
const EMPHASIZE_EXPERIENCE: &str = "Emphasize relevant work experience and achievements";
const TAILOR_KEYWORDS: &str = "Tailor your resume keywords to match the job description";
const INCLUDE_ACCOMPLISHMENTS: &str = "Include specific examples of your accomplishments";

/// Builds the ordered advice list from the gap analysis and raw sub-scores.
pub fn build_recommendations(
    missing_skills: &[String],
    skills_score: f64,
    experience_score: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();
        recommendations.push(format!("Add experience with: {}", top.join(", ")));
    }

    if skills_score < 70.0 {
        recommendations.push(HIGHLIGHT_SKILLS.to_string());
    }

    if experience_score < 70.0 {
        recommendations.push(EMPHASIZE_EXPERIENCE.to_string());
    }

    recommendations.push(TAILOR_KEYWORDS.to_string());
    recommendations.push(INCLUDE_ACCOMPLISHMENTS.to_string());

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
