//! Document-level input and result of the contract pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::capability::CapabilityStatus;
use super::clause::Clause;
use super::readability::Metrics;
use super::simplification::SimplificationLevel;
use super::terms::LegalTerm;

/// Prefix an upstream extractor puts in front of an error payload
pub const EXTRACTION_ERROR_MARKER: &str = "[ERROR]";

/// Title used when a document has no filename
pub const UNTITLED_DOCUMENT: &str = "Untitled document";

/// Raw extracted text of one document plus identification
#[derive(Debug, Clone, Default)]
pub struct DocumentInput {
    pub raw_text: String,
    pub filename: Option<String>,
    pub document_id: Option<String>,
}

impl DocumentInput {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Default::default()
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_document_id(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }

    /// Payload of an upstream extraction error, if the text carries one
    pub fn extraction_error(&self) -> Option<&str> {
        self.raw_text
            .trim_start()
            .strip_prefix(EXTRACTION_ERROR_MARKER)
            .map(str::trim)
    }
}

/// Capability availability as reported alongside a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityReport {
    #[serde(flatten)]
    pub status: CapabilityStatus,
    pub degraded: bool,
}

impl From<CapabilityStatus> for CapabilityReport {
    fn from(status: CapabilityStatus) -> Self {
        Self {
            degraded: status.is_degraded(),
            status,
        }
    }
}

/// Everything produced for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub document_id: String,
    pub document_title: String,
    pub raw_text: String,
    /// Whitespace-delimited tokens of the raw text
    pub word_count: usize,
    pub clause_count: usize,
    pub simplification_level: SimplificationLevel,
    pub clauses: Vec<Clause>,
    pub legal_terms: Vec<LegalTerm>,
    pub original_readability: Metrics,
    pub simplified_readability: Metrics,
    pub original_reading_ease: f64,
    pub simplified_reading_ease: f64,
    pub simplified_text: String,
    pub clause_type_summary: BTreeMap<String, usize>,
    pub capabilities: CapabilityReport,
    pub processed_at: DateTime<Utc>,
}

impl PipelineResult {
    /// Count clauses per type label
    pub fn summarize_types(clauses: &[Clause]) -> BTreeMap<String, usize> {
        let mut summary = BTreeMap::new();
        for clause in clauses {
            *summary.entry(clause.clause_type.label().to_string()).or_insert(0) += 1;
        }
        summary
    }
}
