//! Fixed lookup tables for the analyzer. Ordered slices, not maps: table order
//! decides output order wherever results are collected from them.

/// Related terms that earn partial credit for a required skill, keyed by the
/// required skill's lowercase name. One-directional: "react" has its own
/// entry and is not reachable through "javascript".
pub const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "node", "react", "vue", "angular"]),
    ("python", &["django", "flask", "pandas", "numpy"]),
    ("java", &["spring", "hibernate", "maven"]),
    ("react", &["jsx", "redux", "hooks"]),
    ("database", &["sql", "mysql", "postgresql", "mongodb"]),
    ("aws", &["cloud", "ec2", "s3", "lambda"]),
];

/// Technical terms surfaced as missing when the job mentions them and the
/// resume does not.
pub const TECH_TERMS: &[&str] = &[
    "typescript",
    "javascript",
    "react",
    "vue",
    "angular",
    "python",
    "java",
    "spring",
    "django",
    "flask",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "ci/cd",
    "api",
    "rest",
    "graphql",
    "microservices",
    "agile",
    "scrum",
    "testing",
    "jest",
    "cypress",
];

/// Education keyword → ordinal level (higher is more advanced).
pub const EDUCATION_LEVELS: &[(&str, u8)] = &[
    ("phd", 5),
    ("doctorate", 5),
    ("masters", 4),
    ("master", 4),
    ("bachelor", 3),
    ("associate", 2),
    ("diploma", 1),
    ("certificate", 1),
];

pub fn related_terms(skill: &str) -> &'static [&'static str] {
    SKILL_SYNONYMS
        .iter()
        .find(|(key, _)| *key == skill)
        .map(|(_, terms)| *terms)
        .unwrap_or(&[])
}
