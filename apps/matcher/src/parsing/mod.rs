//! Document Parser: raw upload bytes → `ParsedDocument`.
//!
//! Decoding is format-specific (see `decode`); everything after that is a
//! plain-text pass: locate each section by heading keywords, then keep the
//! lines of that section that look like entries of the right kind.

pub mod decode;
pub mod entries;
pub mod format;
pub mod sections;
pub mod skills;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::errors::ParseError;
use crate::models::ParsedDocument;
use crate::parsing::entries::{
    collect_entries, is_certification_entry, is_education_entry, is_experience_entry,
    MAX_CERTIFICATION_ENTRIES, MAX_EDUCATION_ENTRIES, MAX_EXPERIENCE_ENTRIES,
};
use crate::parsing::sections::{find_section, SectionKind};
use crate::parsing::skills::match_skill_catalog;

pub use format::DocumentFormat;

/// Upload ceiling applied when none is configured (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Stateless parser; the only knob is the upload size ceiling.
#[derive(Debug, Clone, Copy)]
pub struct DocumentParser {
    max_bytes: usize,
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl DocumentParser {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn parse(&self, bytes: &[u8], format: DocumentFormat) -> Result<ParsedDocument, ParseError> {
        if bytes.len() > self.max_bytes {
            return Err(ParseError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }

        let max_part_bytes = self.max_bytes.saturating_mul(decode::MAX_DOCX_EXPANSION);
        let text = decode::decode(bytes, format, max_part_bytes)?;
        let parsed = extract_fields(text);

        info!(
            format = format.mime_type(),
            bytes = bytes.len(),
            skills = parsed.skills.len(),
            experience = parsed.experience.len(),
            education = parsed.education.len(),
            certifications = parsed.certifications.len(),
            "Parsed resume"
        );

        Ok(parsed)
    }

    pub fn parse_mime(&self, bytes: &[u8], mime_type: &str) -> Result<ParsedDocument, ParseError> {
        let format = DocumentFormat::from_mime(mime_type)?;
        self.parse(bytes, format)
    }
}

/// Parses an upload declared with `mime_type`, using the default size ceiling.
pub fn parse_resume(bytes: &[u8], mime_type: &str) -> Result<ParsedDocument, ParseError> {
    DocumentParser::default().parse_mime(bytes, mime_type)
}

/// Splits already-decoded text into the structured resume fields.
pub fn extract_fields(text: String) -> ParsedDocument {
    let skills = find_section(&text, SectionKind::Skills)
        .map(|body| match_skill_catalog(&body.join("\n")))
        .unwrap_or_default();

    let experience = section_entries(
        &text,
        SectionKind::Experience,
        is_experience_entry,
        MAX_EXPERIENCE_ENTRIES,
    );
    let education = section_entries(
        &text,
        SectionKind::Education,
        is_education_entry,
        MAX_EDUCATION_ENTRIES,
    );
    let certifications = section_entries(
        &text,
        SectionKind::Certifications,
        is_certification_entry,
        MAX_CERTIFICATION_ENTRIES,
    );

    ParsedDocument {
        raw_text: text,
        skills,
        experience,
        education,
        certifications,
    }
}

fn section_entries(
    text: &str,
    kind: SectionKind,
    keep: fn(&str) -> bool,
    limit: usize,
) -> Vec<String> {
    match find_section(text, kind) {
        Some(body) => collect_entries(&body, keep, limit),
        None => {
            debug!(section = ?kind, "Section heading not found");
            Vec::new()
        }
    }
}

/// Reads an upload from disk, refusing files above `max_bytes` before reading them.
pub async fn read_upload(path: &Path, max_bytes: usize) -> Result<Vec<u8>> {
    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Cannot stat '{}'", path.display()))?;

    let size = usize::try_from(meta.len()).unwrap_or(usize::MAX);
    if size > max_bytes {
        return Err(ParseError::TooLarge {
            size,
            limit: max_bytes,
        })
        .with_context(|| format!("Refusing to read '{}'", path.display()));
    }

    tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read '{}'", path.display()))
}
