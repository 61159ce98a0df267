//! Legal term records and the fixed vocabulary they are resolved against

pub mod lexicon;

use serde::{Deserialize, Serialize};

pub use lexicon::{definition_for, GENERIC_DEFINITION, LEXICON, TERM_DEFINITIONS};

/// Category assigned to quoted and definition-pattern terms
pub const DEFINED_TERM_CATEGORY: &str = "Defined Term";

/// Which extraction pass discovered a term, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermSource {
    QuotedTerm,
    DefinitionPattern,
    Lexicon,
    Entity,
}

/// A legal term with its plain-language definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalTerm {
    pub term: String,
    pub category: String,
    pub definition: String,
    pub simplified_explanation: String,
    pub source: TermSource,
}

impl LegalTerm {
    /// Build a term, resolving its definition from the fixed dictionary
    pub fn new(term: impl Into<String>, category: impl Into<String>, source: TermSource) -> Self {
        let term = term.into();
        let definition = definition_for(&term).to_string();

        Self {
            simplified_explanation: definition.clone(),
            definition,
            term,
            category: category.into(),
            source,
        }
    }

    /// Case-insensitive uniqueness key
    pub fn key(&self) -> String {
        self.term.to_lowercase()
    }
}
