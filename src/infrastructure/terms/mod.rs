//! Legal term extraction

mod extractor;

pub use extractor::{LegalTermExtractor, ENTITY_SCAN_CHARS, TERM_ENTITY_LABELS};
