//! Document ingestion infrastructure
//!
//! Extractors turning uploaded PDF, DOCX and text files into raw contract text.

mod docx;
mod factory;
mod pdf;
mod plain_text;

pub use docx::DocxExtractor;
pub use factory::ExtractorFactory;
pub use pdf::PdfExtractor;
pub use plain_text::PlainTextExtractor;
