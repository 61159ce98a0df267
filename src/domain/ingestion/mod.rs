//! Contract file ingestion: formats and the text extractor seam

mod extractor;
mod format;

pub use extractor::{ExtractedText, TextExtractor};
pub use format::{detect_format, DocumentFormat, ALL_FORMATS};

#[cfg(test)]
pub use extractor::mock::MockTextExtractor;
