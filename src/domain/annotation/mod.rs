//! Named-entity annotation types and the optional recognizer capability

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::DomainError;

/// A named entity found in text: surface form plus category label (e.g. `ORG`, `LAW`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Outcome of asking for entities.
///
/// Keeps "nothing found" apart from "could not look" so callers and tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityExtraction {
    Extracted(Vec<Entity>),
    Unavailable,
    Failed { reason: String },
}

impl EntityExtraction {
    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extracted(_))
    }

    /// Entities found, empty when unavailable or failed
    pub fn into_entities(self) -> Vec<Entity> {
        match self {
            Self::Extracted(entities) => entities,
            Self::Unavailable | Self::Failed { .. } => Vec::new(),
        }
    }
}

/// Trait for named-entity recognizers
#[async_trait]
pub trait EntityRecognizer: Send + Sync + Debug {
    /// Recognize entities in document order
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, DomainError>;

    /// Get the recognizer name
    fn recognizer_name(&self) -> &'static str;
}


#[cfg(test)]
pub use mock::MockEntityRecognizer;
