//! Text extractor trait and its output

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use super::DocumentFormat;
use crate::domain::DomainError;

/// Raw contract text pulled out of a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedText {
    pub text: String,
    pub format: DocumentFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ExtractedText {
    pub fn new(text: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            text: text.into(),
            format,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Turns the bytes of one file format into raw text.
///
/// A file that cannot be read fails with `DomainError::Extraction`, which aborts the document.
#[async_trait]
pub trait TextExtractor: Send + Sync + Debug {
    fn format(&self) -> DocumentFormat;

    async fn extract(&self, bytes: Vec<u8>) -> Result<String, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Mock extractor returning fixed text or an extraction failure
    #[derive(Debug)]
    pub struct MockTextExtractor {
        format: DocumentFormat,
        result: Result<String, String>,
    }

    impl MockTextExtractor {
        pub fn new(text: impl Into<String>) -> Self {
            Self {
                format: DocumentFormat::PlainText,
                result: Ok(text.into()),
            }
        }

        pub fn failing(error: impl Into<String>) -> Self {
            Self {
                format: DocumentFormat::PlainText,
                result: Err(error.into()),
            }
        }
    }

    #[async_trait]
    impl TextExtractor for MockTextExtractor {
        fn format(&self) -> DocumentFormat {
            self.format
        }

        async fn extract(&self, _bytes: Vec<u8>) -> Result<String, DomainError> {
            self.result.clone().map_err(DomainError::extraction)
        }
    }
}
