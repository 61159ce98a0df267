//! Classification with model-first, rules-fallback strategy

use std::sync::Arc;
use tracing::warn;

use super::rule_based::classify_by_rules;
use crate::domain::{ClauseClassifier, ClauseType};
use crate::infrastructure::capability::{LazyCapability, CLAUSE_MODEL};

/// Classifies clauses with the learned model when it loaded, otherwise with keyword rules.
///
/// A model error on one clause falls back to the rules for that clause only.
#[derive(Debug, Clone)]
pub struct ClassificationService {
    model: Arc<LazyCapability<dyn ClauseClassifier>>,
}

impl ClassificationService {
    pub fn new(model: Arc<LazyCapability<dyn ClauseClassifier>>) -> Self {
        Self { model }
    }

    /// Service that only ever uses the keyword rules
    pub fn rule_based() -> Self {
        Self::new(Arc::new(LazyCapability::unavailable(
            CLAUSE_MODEL,
            "not configured",
        )))
    }

    /// Resolve the model once; returns whether it is available
    pub async fn initialize(&self) -> bool {
        self.model.is_available().await
    }

    pub async fn classify(&self, text: &str) -> ClauseType {
        let Some(model) = self.model.instance().await else {
            return classify_by_rules(text);
        };

        match model.classify(text).await {
            Ok(label) => label,
            Err(e) => {
                warn!(
                    classifier = model.classifier_name(),
                    error = %e,
                    "Model classification failed, using keyword rules"
                );
                classify_by_rules(text)
            }
        }
    }
}
