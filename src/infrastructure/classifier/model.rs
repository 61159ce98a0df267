//! Model-backed clause classifier

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::{ClauseClassifier, ClauseType, DomainError};

/// Clause text sent to the model is cut to this many characters
const MAX_CLAUSE_CHARS: usize = 2000;

/// Classifier that asks an inference endpoint for one taxonomy label
#[derive(Debug)]
pub struct LlmClauseClassifier<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> LlmClauseClassifier<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    fn system_prompt() -> String {
        let labels: Vec<String> = ClauseType::MODEL_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{}: {}", i, label))
            .collect();

        format!(
            "You classify contract clauses. Reply with exactly one label from this list, \
             either its name or its number, and nothing else.\n{}",
            labels.join("\n")
        )
    }
}

/// Map a model reply to a label: a label name, an index, or `LABEL_<n>`; anything else is `Other`
pub(crate) fn parse_label(reply: &str) -> ClauseType {
    let cleaned = reply
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '.' || c == '`')
        .trim();

    let numeric = cleaned
        .strip_prefix("LABEL_")
        .or_else(|| cleaned.strip_prefix("label_"))
        .unwrap_or(cleaned);

    if let Ok(index) = numeric.parse::<usize>() {
        return ClauseType::from_index(index);
    }

    ClauseType::from_label(cleaned).unwrap_or(ClauseType::Other)
}

#[async_trait]
impl<P: LlmProvider> ClauseClassifier for LlmClauseClassifier<P> {
    async fn classify(&self, text: &str) -> Result<ClauseType, DomainError> {
        let clause: String = text.chars().take(MAX_CLAUSE_CHARS).collect();

        let request = LlmRequest::builder()
            .system(Self::system_prompt())
            .user(clause)
            .temperature(0.0)
            .max_tokens(8)
            .build();

        let response = self.provider.chat(&self.model, request).await?;
        let content = response
            .content()
            .ok_or_else(|| DomainError::provider("clause_model", "Empty response from model"))?;

        let label = parse_label(content);
        debug!(model = %self.model, reply = content, label = %label, "Model classified clause");

        Ok(label)
    }

    fn classifier_name(&self) -> &'static str {
        "model"
    }
}
