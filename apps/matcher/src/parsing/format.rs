use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

pub const MIME_PLAIN_TEXT: &str = "text/plain";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Declared format of an uploaded resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves a MIME type. Matching is case-insensitive and ignores
    /// parameters such as `; charset=utf-8`.
    pub fn from_mime(mime: &str) -> Result<Self, ParseError> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            MIME_PLAIN_TEXT => Ok(DocumentFormat::PlainText),
            MIME_PDF => Ok(DocumentFormat::Pdf),
            MIME_DOCX => Ok(DocumentFormat::Docx),
            _ => Err(ParseError::UnsupportedFormat(mime.trim().to_string())),
        }
    }

    /// Resolves a file extension (`.txt`, `.pdf`, `.docx`).
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" => Ok(DocumentFormat::PlainText),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(ParseError::UnsupportedFormat(format!(
                "unrecognized file extension '{ext}' ({})",
                path.display()
            ))),
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            DocumentFormat::PlainText => MIME_PLAIN_TEXT,
            DocumentFormat::Pdf => MIME_PDF,
            DocumentFormat::Docx => MIME_DOCX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_mime_types() {
        assert_eq!(
            DocumentFormat::from_mime("text/plain").unwrap(),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_mime("application/pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_mime(MIME_DOCX).unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_mime_parameters_and_case_ignored() {
        assert_eq!(
            DocumentFormat::from_mime("Text/Plain; charset=UTF-8").unwrap(),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn test_unknown_mime_is_unsupported() {
        let err = DocumentFormat::from_mime("image/png").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(m) if m == "image/png"));
    }

    #[test]
    fn test_legacy_word_is_unsupported() {
        assert!(DocumentFormat::from_mime("application/msword").is_err());
    }

    #[test]
    fn test_from_path_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv/Resume.PDF")).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("resume.docx")).unwrap(),
            DocumentFormat::Docx
        );
        assert!(DocumentFormat::from_path(Path::new("resume")).is_err());
    }

    #[test]
    fn test_mime_type_round_trips() {
        for format in [
            DocumentFormat::PlainText,
            DocumentFormat::Pdf,
            DocumentFormat::Docx,
        ] {
            assert_eq!(DocumentFormat::from_mime(format.mime_type()).unwrap(), format);
        }
    }
}
