//! Clause records and segmentation units

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClauseType;
use crate::domain::annotation::Entity;

/// Boilerplate cue that opened a marker-delimited segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClauseMarker {
    Annexure,
    Heading,
    Subheading,
    Preamble,
    AndSeparator,
    Whereas,
    Witnesseth,
    NumberedClause,
    InWitness,
    Seal,
    Signed,
    EmployerSig,
    ContractorSig,
    Note,
}

impl ClauseMarker {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Annexure => "ANNEXURE",
            Self::Heading => "HEADING",
            Self::Subheading => "SUBHEADING",
            Self::Preamble => "PREAMBLE",
            Self::AndSeparator => "AND_SEPARATOR",
            Self::Whereas => "WHEREAS",
            Self::Witnesseth => "WITNESSETH",
            Self::NumberedClause => "NUMBERED_CLAUSE",
            Self::InWitness => "IN_WITNESS",
            Self::Seal => "SEAL",
            Self::Signed => "SIGNED",
            Self::EmployerSig => "EMPLOYER_SIG",
            Self::ContractorSig => "CONTRACTOR_SIG",
            Self::Note => "NOTE",
        }
    }
}

impl fmt::Display for ClauseMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A clause-like unit produced by segmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Marker that opened this segment; `None` for leading text and fallbacks
    pub marker: Option<ClauseMarker>,
}

impl Segment {
    pub fn new(text: impl Into<String>, marker: Option<ClauseMarker>) -> Self {
        Self {
            text: text.into(),
            marker,
        }
    }

    pub fn unmarked(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }
}

/// Sentence and entity annotations for one clause
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseAnnotation {
    pub raw_text: String,
    pub cleaned_text: String,
    pub sentences: Vec<String>,
    pub entities: Vec<Entity>,
}

/// A fully processed clause, owned by the document result it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// 1-based position in document order
    pub index: usize,
    pub raw_text: String,
    pub cleaned_text: String,
    pub sentences: Vec<String>,
    pub entities: Vec<Entity>,
    #[serde(rename = "type")]
    pub clause_type: ClauseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<ClauseMarker>,
    pub simplified: String,
}

impl Clause {
    pub fn new(
        index: usize,
        annotation: ClauseAnnotation,
        marker: Option<ClauseMarker>,
        clause_type: ClauseType,
        simplified: impl Into<String>,
    ) -> Self {
        Self {
            index,
            raw_text: annotation.raw_text,
            cleaned_text: annotation.cleaned_text,
            sentences: annotation.sentences,
            entities: annotation.entities,
            clause_type,
            marker,
            simplified: simplified.into(),
        }
    }
}
