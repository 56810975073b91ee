//! Byte-level decoding: turns an upload of a known format into plain UTF-8 text.

use std::io::{Cursor, Read};
use std::panic;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::ParseError;
use crate::parsing::format::DocumentFormat;

const DOCX_BODY_PART: &str = "word/document.xml";

/// How far an archive member may inflate relative to the upload ceiling.
/// WordprocessingML compresses well, so ordinary resumes stay far below it.
pub const MAX_DOCX_EXPANSION: usize = 10;

/// Decodes `bytes` as `format`. `max_part_bytes` bounds the uncompressed size
/// of archive members read along the way.
pub fn decode(
    bytes: &[u8],
    format: DocumentFormat,
    max_part_bytes: usize,
) -> Result<String, ParseError> {
    match format {
        DocumentFormat::PlainText => decode_plain_text(bytes),
        DocumentFormat::Pdf => decode_pdf(bytes),
        DocumentFormat::Docx => decode_docx(bytes, max_part_bytes),
    }
}

fn decode_plain_text(bytes: &[u8]) -> Result<String, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::Decode(format!("Text file is not valid UTF-8: {e}")))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

fn decode_pdf(bytes: &[u8]) -> Result<String, ParseError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ParseError::Decode(format!(
            "Failed to extract text from PDF: {e}"
        ))),
        Err(_) => Err(ParseError::Decode(
            "PDF extractor aborted on malformed input".to_string(),
        )),
    }
}

fn decode_docx(bytes: &[u8], max_part_bytes: usize) -> Result<String, ParseError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ParseError::Decode(format!("Failed to open DOCX container: {e}")))?;

    let part = archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ParseError::Decode(format!("DOCX has no {DOCX_BODY_PART}: {e}")))?;
    let declared = part.size();
    let xml = read_part_bounded(part, declared, max_part_bytes)?;

    docx_xml_to_text(&xml)
}

/// Reads an archive member as UTF-8, refusing it once it exceeds `limit`
/// bytes. The declared size is checked first; the read itself is capped too
/// since the header can understate the real size.
fn read_part_bounded<R: Read>(part: R, declared: u64, limit: usize) -> Result<String, ParseError> {
    let declared = usize::try_from(declared).unwrap_or(usize::MAX);
    if declared > limit {
        return Err(ParseError::TooLarge {
            size: declared,
            limit,
        });
    }

    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut xml = String::new();
    part.take(cap)
        .read_to_string(&mut xml)
        .map_err(|e| ParseError::Decode(format!("Failed to read {DOCX_BODY_PART}: {e}")))?;

    if xml.len() > limit {
        return Err(ParseError::TooLarge {
            size: xml.len(),
            limit,
        });
    }
    Ok(xml)
}

/// Flattens WordprocessingML into lines: one line per paragraph, `w:t` runs
/// concatenated, tabs and breaks kept only inside runs.
fn docx_xml_to_text(xml: &str) -> Result<String, ParseError> {
    let mut reader = Reader::from_str(xml);

    let mut out = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" if in_run => in_text = true,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"tab" if in_run => out.push('\t'),
                b"br" | b"cr" if in_run => out.push('\n'),
                b"p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|err| ParseError::Decode(format!("Malformed DOCX text: {err}")))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ParseError::Decode(format!(
                    "Malformed DOCX XML at position {}: {e}",
                    reader.error_position()
                )))
            }
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use super::*;

    const NO_LIMIT: usize = usize::MAX;

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Technical Skills</w:t></w:r></w:p>
    <w:p><w:r><w:t>Rust, Python</w:t></w:r><w:r><w:t xml:space="preserve"> &amp; AWS</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Acme</w:t><w:tab/><w:t>2019</w:t><w:br/><w:t>Remote</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    /// Minimal DOCX container holding only the main document part.
    pub(crate) fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file(DOCX_BODY_PART, zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    /// Single-page PDF with one Helvetica text line per entry of `lines`.
    pub(crate) fn build_pdf(lines: &[&str]) -> Vec<u8> {
        let mut content = String::from("BT\n/F1 12 Tf\n14 TL\n72 720 Td\n");
        for line in lines {
            content.push_str(&format!("({line}) Tj\nT*\n"));
        }
        content.push_str("ET\n");

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}endstream",
                content.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
             /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
        }

        let xref_at = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
        pdf.push_str("0000000000 65535 f \n");
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.into_bytes()
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = decode(b"Skills\nRust", DocumentFormat::PlainText, NO_LIMIT).unwrap();
        assert_eq!(text, "Skills\nRust");
    }

    #[test]
    fn test_plain_text_strips_bom() {
        let text = decode(b"\xEF\xBB\xBFSkills", DocumentFormat::PlainText, NO_LIMIT).unwrap();
        assert_eq!(text, "Skills");
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = decode(&[0x66, 0xff, 0xfe], DocumentFormat::PlainText, NO_LIMIT).unwrap_err();
        assert!(matches!(err, ParseError::Decode(_)));
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let bytes = build_docx(DOCUMENT_XML);
        let text = decode(&bytes, DocumentFormat::Docx, NO_LIMIT).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["Technical Skills", "Rust, Python & AWS", "", "Acme\t2019", "Remote"]
        );
    }

    #[test]
    fn test_docx_without_body_part_is_decode_error() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("word/styles.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"<w:styles/>").unwrap();
            writer.finish().unwrap();
        }
        let err = decode(&buf.into_inner(), DocumentFormat::Docx, NO_LIMIT).unwrap_err();
        assert!(matches!(err, ParseError::Decode(msg) if msg.contains(DOCX_BODY_PART)));
    }

    #[test]
    fn test_non_zip_docx_is_decode_error() {
        let err = decode(b"plainly not a zip", DocumentFormat::Docx, NO_LIMIT).unwrap_err();
        assert!(matches!(err, ParseError::Decode(_)));
    }

    #[test]
    fn test_garbage_pdf_is_decode_error() {
        let err = decode(b"%PDF-1.4 truncated", DocumentFormat::Pdf, NO_LIMIT).unwrap_err();
        assert!(matches!(err, ParseError::Decode(_)));
    }

    #[test]
    fn test_pdf_text_is_extracted() {
        let bytes = build_pdf(&["Skills: Python, AWS", "Experience"]);
        let text = decode(&bytes, DocumentFormat::Pdf, NO_LIMIT).unwrap();
        assert!(text.contains("Skills: Python, AWS"), "got {text:?}");
        assert!(text.contains("Experience"));
    }

    #[test]
    fn test_docx_body_over_limit_is_rejected() {
        let xml = format!(
            "<w:document><w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:body></w:document>",
            "a".repeat(64 * 1024)
        );
        let bytes = build_docx(&xml);
        assert!(bytes.len() < 4 * 1024);

        let err = decode(&bytes, DocumentFormat::Docx, 4 * 1024).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TooLarge { size, limit: 4096 } if size == xml.len()
        ));
    }

    #[test]
    fn test_bounded_read_ignores_understated_size() {
        let body = "x".repeat(100);
        let err = read_part_bounded(body.as_bytes(), 10, 50).unwrap_err();
        assert!(matches!(err, ParseError::TooLarge { size: 51, limit: 50 }));
    }

    #[test]
    fn test_bounded_read_within_limit() {
        let xml = read_part_bounded("<w:p/>".as_bytes(), 6, 6).unwrap();
        assert_eq!(xml, "<w:p/>");
    }
}
