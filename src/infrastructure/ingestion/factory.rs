//! Factory for text extractors

use std::sync::Arc;
use tracing::info;

use crate::domain::ingestion::{detect_format, DocumentFormat, ExtractedText, TextExtractor};
use crate::domain::DomainError;

use super::{DocxExtractor, PdfExtractor, PlainTextExtractor};

#[derive(Debug, Default)]
pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(format: DocumentFormat) -> Arc<dyn TextExtractor> {
        match format {
            DocumentFormat::Pdf => Arc::new(PdfExtractor::new()),
            DocumentFormat::Docx => Arc::new(DocxExtractor::new()),
            DocumentFormat::PlainText => Arc::new(PlainTextExtractor::new()),
        }
    }

    /// Pick the extractor for a file from its extension
    pub fn for_filename(filename: &str) -> Result<Arc<dyn TextExtractor>, DomainError> {
        detect_format(filename).map(Self::create)
    }

    /// Extract the raw text of one uploaded file
    pub async fn extract_file(filename: &str, bytes: Vec<u8>) -> Result<ExtractedText, DomainError> {
        let extractor = Self::for_filename(filename)?;
        let text = extractor.extract(bytes).await?;

        info!(
            filename = %filename,
            format = %extractor.format(),
            chars = text.chars().count(),
            "Extracted document text"
        );

        Ok(ExtractedText::new(text, extractor.format()).with_source(filename))
    }
}
