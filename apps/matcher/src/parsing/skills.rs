/// Known technology names. Output order follows this table, not the document.
pub const SKILL_CATALOG: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Python",
    "Java",
    "Spring",
    "Django",
    "Flask",
    "SQL",
    "NoSQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "Git",
    "CI/CD",
    "REST",
    "GraphQL",
    "HTML",
    "CSS",
    "SASS",
    "Redux",
    "Express",
    "Jest",
    "Cypress",
    "Webpack",
];

/// Every catalog entry that occurs (case-insensitive substring) in `text`.
///
/// Substring semantics are intentional: "JavaScript" also yields "Java".
pub fn match_skill_catalog(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    SKILL_CATALOG
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}
