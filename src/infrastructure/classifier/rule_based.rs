//! Deterministic keyword classifier

use async_trait::async_trait;

use crate::domain::{ClauseClassifier, ClauseType, DomainError};

/// Label → keywords, evaluated top to bottom; the first label with any keyword match wins
pub const CLAUSE_RULES: &[(ClauseType, &[&str])] = &[
    (
        ClauseType::Confidentiality,
        &["confidential", "confidentiality", "non-disclosure", "nda", "proprietary information"],
    ),
    (
        ClauseType::Termination,
        &["terminate", "termination", "expire", "end of contract", "breach", "cancel"],
    ),
    (
        ClauseType::Indemnity,
        &["indemnify", "indemnity", "hold harmless", "defend against"],
    ),
    (
        ClauseType::DisputeResolution,
        &["arbitration", "dispute", "mediation", "court", "sole arbitrator", "litigation"],
    ),
    (
        ClauseType::GoverningLaw,
        &["governing law", "laws in force", "law of ", "applicable law"],
    ),
    (
        ClauseType::PaymentTerms,
        &["payment", "fee", "invoice", "compensation", "price", "remuneration", "salary"],
    ),
    (
        ClauseType::IntellectualProperty,
        &["intellectual property", "copyright", "trademark", "patent", "ip rights", "ownership"],
    ),
    (
        ClauseType::Warranties,
        &["warranty", "warranties", "represent", "guarantee", "assurance"],
    ),
    (
        ClauseType::LimitationOfLiability,
        &["limitation of liability", "limited to", "aggregate liability", "consequential damages"],
    ),
    (
        ClauseType::ForceMajeure,
        &["force majeure", "act of god", "natural disaster", "unforeseen circumstances"],
    ),
    (
        ClauseType::Assignment,
        &["assignment", "transfer", "assign rights", "delegate"],
    ),
    (
        ClauseType::NonCompete,
        &["non-compete", "non compete", "competitive", "solicitation", "restrictive covenant"],
    ),
    (
        ClauseType::Severability,
        &["severability", "severable", "invalid provision", "unenforceable"],
    ),
    (
        ClauseType::Amendment,
        &["amendment", "modify", "modification", "change", "variation"],
    ),
    (
        ClauseType::Notice,
        &["notice", "notification", "inform", "written notice", "email to"],
    ),
];

/// Classify by substring keyword rules on lower-cased text
pub fn classify_by_rules(text: &str) -> ClauseType {
    if text.trim().is_empty() {
        return ClauseType::Other;
    }

    let lowered = text.to_lowercase();

    CLAUSE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map_or(ClauseType::Other, |(label, _)| *label)
}

/// Keyword-rule classifier; never fails
#[derive(Debug, Clone, Default)]
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClauseClassifier for RuleBasedClassifier {
    async fn classify(&self, text: &str) -> Result<ClauseType, DomainError> {
        Ok(classify_by_rules(text))
    }

    fn classifier_name(&self) -> &'static str {
        "rule_based"
    }
}
