use serde_json::json;
use thiserror::Error;

/// Failure while turning an uploaded document into a `ParsedDocument`.
///
/// Every variant is the caller's fault (wrong type, broken bytes, oversized
/// upload); none of them is worth retrying since parsing is deterministic.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Document is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

impl ParseError {
    /// Stable machine-readable code, independent of the message text.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ParseError::Decode(_) => "DECODE_ERROR",
            ParseError::TooLarge { .. } => "PAYLOAD_TOO_LARGE",
        }
    }

    /// True when the failure should be surfaced as a 4xx-style rejection.
    pub fn is_client_error(&self) -> bool {
        match self {
            ParseError::UnsupportedFormat(_) | ParseError::TooLarge { .. } => true,
            // The bytes came from the caller, so a failed decode is theirs too.
            ParseError::Decode(_) => true,
        }
    }

    /// Error envelope handed back to collaborators.
    pub fn to_json(&self) -> serde_json::Value {
        let message = match self {
            ParseError::UnsupportedFormat(mime) => format!(
                "Unsupported file type '{mime}'. Only PDF, DOCX, and TXT files are allowed."
            ),
            ParseError::Decode(msg) => {
                tracing::error!("Decode error: {msg}");
                "Failed to parse resume file".to_string()
            }
            ParseError::TooLarge { .. } => self.to_string(),
        };

        json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        })
    }
}
