//! Contract file formats

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::DomainError;

/// Format of an uploaded contract, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    /// Text already extracted elsewhere
    PlainText,
}

/// Every format with an extractor, in detection order
pub const ALL_FORMATS: [DocumentFormat; 3] = [
    DocumentFormat::Pdf,
    DocumentFormat::Docx,
    DocumentFormat::PlainText,
];

impl DocumentFormat {
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Docx => &["docx"],
            Self::PlainText => &["txt", "text"],
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::PlainText => "text/plain",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::PlainText => "plain text",
        })
    }
}

/// Pick the format of a file from its extension (case-insensitive)
pub fn detect_format(filename: &str) -> Result<DocumentFormat, DomainError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    ALL_FORMATS
        .into_iter()
        .find(|format| format.extensions().contains(&ext.as_str()))
        .ok_or_else(|| {
            DomainError::unsupported(format!(
                "Unsupported file type for '{}'. Only PDF, DOCX and plain text are supported",
                filename
            ))
        })
}
