//! Attachment text extraction
//!
//! Turns an uploaded file into plain text before it is prepended to the
//! user's typed message. Dispatch is by case-insensitive extension; any
//! failure aborts the submission before a network call is made.

use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use thiserror::Error;

/// Error type for attachment text extraction
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Could not process the attached file {name}: {reason}")]
    Unreadable { name: String, reason: String },
}

impl ExtractionError {
    fn unreadable(name: &str, reason: impl std::fmt::Display) -> Self {
        Self::Unreadable {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Extract plain text from an uploaded file
///
/// Supported formats: `.pdf` (page-by-page text, pages joined with single
/// spaces), `.docx` (raw text of the document body), `.txt` and `.md`
/// (strict UTF-8 decode).
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => extract_pdf(filename, bytes),
        Some("docx") => extract_docx(filename, bytes),
        Some("txt") | Some("md") => decode_utf8(filename, bytes),
        _ => Err(ExtractionError::UnsupportedType(filename.to_string())),
    }
}

/// Page-by-page PDF text extraction
fn extract_pdf(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let document = lopdf::Document::load_mem(bytes)
        .map_err(|e| ExtractionError::unreadable(filename, e))?;

    let mut pages = Vec::new();
    for page_number in document.get_pages().keys() {
        let page_text = document
            .extract_text(&[*page_number])
            .map_err(|e| ExtractionError::unreadable(filename, e))?;
        pages.push(page_text.trim().to_string());
    }

    Ok(pages.join(" "))
}

/// Raw text extraction from the docx document body
///
/// A docx file is a zip container; the body lives in `word/document.xml`.
/// Text runs (`w:t`) are concatenated, with paragraph ends becoming
/// newlines.
fn extract_docx(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| ExtractionError::unreadable(filename, e))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractionError::unreadable(filename, e))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::unreadable(filename, e))?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| ExtractionError::unreadable(filename, e))?;
                text.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractionError::unreadable(filename, e)),
            _ => {}
        }
    }

    Ok(text.trim().to_string())
}

/// Strict UTF-8 decode for plain-text formats
fn decode_utf8(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| ExtractionError::unreadable(filename, "file is not valid UTF-8 text"))
}
