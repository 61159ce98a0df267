//! DOCX text extraction

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tracing::debug;

use crate::domain::ingestion::{DocumentFormat, TextExtractor};
use crate::domain::DomainError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph text of a Word document: one line per non-blank paragraph, each trimmed
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    async fn extract(&self, bytes: Vec<u8>) -> Result<String, DomainError> {
        let paragraphs = tokio::task::spawn_blocking(move || read_paragraphs(bytes))
            .await
            .map_err(|e| DomainError::extraction(format!("Could not extract DOCX: {}", e)))??;

        debug!(paragraphs = paragraphs.len(), "Extracted DOCX text");
        Ok(paragraphs.join("\n"))
    }
}

fn extraction_error(error: impl std::fmt::Display) -> DomainError {
    DomainError::extraction(format!("Could not extract DOCX: {}", error))
}

fn read_paragraphs(bytes: Vec<u8>) -> Result<Vec<String>, DomainError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(extraction_error)?;
    let mut part = archive.by_name(DOCUMENT_PART).map_err(extraction_error)?;

    let mut xml = String::new();
    part.read_to_string(&mut xml).map_err(extraction_error)?;

    paragraphs_from_xml(&xml)
}

/// Walk `w:p` paragraphs, joining the `w:t` runs inside each.
///
/// Tabs and breaks only count inside a run; `w:tab` also appears in paragraph tab stop definitions.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, DomainError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(extraction_error)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) if in_run => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text => {
                current.push_str(&e.unescape().map_err(extraction_error)?);
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    let paragraph = current.trim();
                    if !paragraph.is_empty() {
                        paragraphs.push(paragraph.to_string());
                    }
                    current.clear();
                }
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
