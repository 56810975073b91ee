use serde::{Deserialize, Serialize};

/// Structured view of one uploaded resume.
///
/// Built once by the parser and never mutated afterwards. Persistence is the
/// caller's concern; the field names serialize in the collaborator schema's
/// camelCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub raw_text: String,
    /// Catalog hits, in catalog order.
    pub skills: Vec<String>,
    /// At most 5 lines, document order.
    pub experience: Vec<String>,
    /// At most 3 lines, document order.
    pub education: Vec<String>,
    /// At most 5 lines, document order.
    pub certifications: Vec<String>,
}

impl ParsedDocument {
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let doc = ParsedDocument {
            raw_text: "Skills\nRust".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["rawText"], "Skills\nRust");
        assert!(json["certifications"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_only_text_is_blank() {
        let doc = ParsedDocument {
            raw_text: " \n\t ".to_string(),
            ..Default::default()
        };
        assert!(doc.is_blank());
    }
}
