//! Text normalization and the lexical (Jaccard) similarity score.

use std::collections::HashSet;

/// Lowercases, replaces everything except word characters and whitespace with
/// a space, then collapses runs of whitespace.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn token_set(normalized: &str) -> HashSet<&str> {
    normalized.split_whitespace().collect()
}

/// Jaccard overlap of the two texts' token sets, scaled to 0–100.
/// Two texts with no tokens at all score 0.
pub fn lexical_similarity(normalized_a: &str, normalized_b: &str) -> f64 {
    let a = token_set(normalized_a);
    let b = token_set(normalized_b);

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();

    intersection as f64 / union as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_collapses() {
        assert_eq!(normalize("  5+ years,  Node.js\n\tCI/CD!  "), "5 years node js ci cd");
    }

    #[test]
    fn test_normalize_keeps_underscores() {
        assert_eq!(normalize("snake_case"), "snake_case");
    }

    #[test]
    fn test_identical_texts_score_100() {
        let text = normalize("Rust engineer with Kubernetes");
        assert_eq!(lexical_similarity(&text, &text), 100.0);
    }

    #[test]
    fn test_disjoint_texts_score_0() {
        assert_eq!(lexical_similarity("rust go", "python java"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // {rust, go} ∩ {rust, java} = {rust}; union has 3 tokens.
        let score = lexical_similarity("rust go", "rust java");
        assert!((score - 100.0 / 3.0).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_duplicate_tokens_count_once() {
        assert_eq!(lexical_similarity("rust rust rust", "rust"), 100.0);
    }

    #[test]
    fn test_both_empty_is_zero() {
        assert_eq!(lexical_similarity("", ""), 0.0);
    }

    #[test]
    fn test_one_empty_is_zero() {
        assert_eq!(lexical_similarity("", "rust"), 0.0);
    }
}
