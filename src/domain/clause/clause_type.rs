//! Fixed clause taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Label assigned to a clause.
///
/// The first fifteen variants are the learned-model label space, in model index order.
/// `Other` is the catch-all for anything the classifiers cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClauseType {
    #[serde(rename = "Confidentiality")]
    Confidentiality,
    #[serde(rename = "Termination")]
    Termination,
    #[serde(rename = "Indemnity")]
    Indemnity,
    #[serde(rename = "Dispute Resolution")]
    DisputeResolution,
    #[serde(rename = "Governing Law")]
    GoverningLaw,
    #[serde(rename = "Payment Terms")]
    PaymentTerms,
    #[serde(rename = "Intellectual Property")]
    IntellectualProperty,
    #[serde(rename = "Warranties")]
    Warranties,
    #[serde(rename = "Limitation of Liability")]
    LimitationOfLiability,
    #[serde(rename = "Force Majeure")]
    ForceMajeure,
    #[serde(rename = "Assignment")]
    Assignment,
    #[serde(rename = "Non-Compete")]
    NonCompete,
    #[serde(rename = "Severability")]
    Severability,
    #[serde(rename = "Amendment")]
    Amendment,
    #[serde(rename = "Notice")]
    Notice,
    #[serde(rename = "Other")]
    Other,
}

impl ClauseType {
    /// Model label space, indexed the way the classifier head emits it
    pub const MODEL_LABELS: [ClauseType; 15] = [
        ClauseType::Confidentiality,
        ClauseType::Termination,
        ClauseType::Indemnity,
        ClauseType::DisputeResolution,
        ClauseType::GoverningLaw,
        ClauseType::PaymentTerms,
        ClauseType::IntellectualProperty,
        ClauseType::Warranties,
        ClauseType::LimitationOfLiability,
        ClauseType::ForceMajeure,
        ClauseType::Assignment,
        ClauseType::NonCompete,
        ClauseType::Severability,
        ClauseType::Amendment,
        ClauseType::Notice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Confidentiality => "Confidentiality",
            Self::Termination => "Termination",
            Self::Indemnity => "Indemnity",
            Self::DisputeResolution => "Dispute Resolution",
            Self::GoverningLaw => "Governing Law",
            Self::PaymentTerms => "Payment Terms",
            Self::IntellectualProperty => "Intellectual Property",
            Self::Warranties => "Warranties",
            Self::LimitationOfLiability => "Limitation of Liability",
            Self::ForceMajeure => "Force Majeure",
            Self::Assignment => "Assignment",
            Self::NonCompete => "Non-Compete",
            Self::Severability => "Severability",
            Self::Amendment => "Amendment",
            Self::Notice => "Notice",
            Self::Other => "Other",
        }
    }

    /// Map a model output index to a label; out-of-range indices are `Other`
    pub fn from_index(index: usize) -> Self {
        Self::MODEL_LABELS
            .get(index)
            .copied()
            .unwrap_or(ClauseType::Other)
    }

    /// Case-insensitive lookup by label text
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();

        Self::MODEL_LABELS
            .iter()
            .chain(std::iter::once(&ClauseType::Other))
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .copied()
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClauseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
            .ok_or_else(|| DomainError::validation(format!("Unknown clause type '{}'", s)))
    }
}
