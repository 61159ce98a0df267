//! PDF text extraction

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ingestion::{DocumentFormat, TextExtractor};
use crate::domain::DomainError;

/// Text layer of a PDF, all pages in order.
///
/// Scanned PDFs without a text layer come back empty.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    async fn extract(&self, bytes: Vec<u8>) -> Result<String, DomainError> {
        let size = bytes.len();

        // pdf-extract is synchronous and may panic on malformed files
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| DomainError::extraction(format!("Could not extract PDF: {}", e)))?
            .map_err(|e| DomainError::extraction(format!("Could not extract PDF: {}", e)))?;

        debug!(bytes = size, chars = text.len(), "Extracted PDF text");
        Ok(text.trim().to_string())
    }
}
