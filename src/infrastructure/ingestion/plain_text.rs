//! Plain text extractor

use async_trait::async_trait;

use crate::domain::ingestion::{DocumentFormat, TextExtractor};
use crate::domain::DomainError;

/// UTF-8 text files; content passes through with its layout intact
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::PlainText
    }

    async fn extract(&self, bytes: Vec<u8>) -> Result<String, DomainError> {
        String::from_utf8(bytes)
            .map_err(|e| DomainError::extraction(format!("Could not decode text file: {}", e)))
    }
}
