//! Model-backed named-entity recognizer

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::{DomainError, Entity, EntityRecognizer};

const SYSTEM_PROMPT: &str = "You extract named entities from legal contract text. \
     Reply with a JSON array of objects with \"text\" and \"label\" fields, in order of appearance. \
     Use the labels PERSON, ORG, GPE, LAW, EVENT, DATE, MONEY, PERCENT, CARDINAL, NORP, LOC. \
     Copy entity text exactly as written. Reply with [] when there are none.";

#[derive(Debug, Deserialize)]
struct RawEntity {
    text: String,
    label: String,
}

/// Extract a JSON array from a reply (handles prose and markdown code fences)
fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}

/// Entity recognizer that asks an inference endpoint for spaCy-style labels
#[derive(Debug)]
pub struct LlmEntityRecognizer<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> LlmEntityRecognizer<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    fn parse_entities(reply: &str) -> Result<Vec<Entity>, DomainError> {
        let json = extract_json_array(reply).ok_or_else(|| {
            DomainError::provider("entity_recognizer", "No JSON array in model reply")
        })?;

        let raw: Vec<RawEntity> = serde_json::from_str(json).map_err(|e| {
            warn!("Failed to parse entity reply: {} - Reply: {}", e, reply);
            DomainError::provider("entity_recognizer", format!("Invalid entity JSON: {}", e))
        })?;

        Ok(raw
            .into_iter()
            .map(|e| Entity::new(e.text.trim(), e.label.trim().to_uppercase()))
            .filter(|e| !e.text.is_empty() && !e.label.is_empty())
            .collect())
    }
}

#[async_trait]
impl<P: LlmProvider> EntityRecognizer for LlmEntityRecognizer<P> {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, DomainError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let request = LlmRequest::builder()
            .system(SYSTEM_PROMPT)
            .user(text)
            .temperature(0.0)
            .build();

        let response = self.provider.chat(&self.model, request).await?;
        let content = response.content().ok_or_else(|| {
            DomainError::provider("entity_recognizer", "Empty response from model")
        })?;

        Self::parse_entities(content)
    }

    fn recognizer_name(&self) -> &'static str {
        "model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;

    #[test]
    fn test_extract_json_array() {
        let reply = "Here you go:\n```json\n[{\"text\": \"Acme\", \"label\": \"ORG\"}]\n```";
        assert_eq!(
            extract_json_array(reply),
            Some("[{\"text\": \"Acme\", \"label\": \"ORG\"}]")
        );
        assert_eq!(extract_json_array("no entities"), None);
    }

    #[tokio::test]
    async fn test_recognize_parses_reply() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_reply(
            r#"[{"text": " Arbitration Act ", "label": "law"}, {"text": "Acme Ltd", "label": "ORG"}]"#,
        ));
        let recognizer = LlmEntityRecognizer::new(provider, "ner");

        let entities = recognizer
            .recognize("Acme Ltd agrees to the Arbitration Act.")
            .await
            .unwrap();

        assert_eq!(
            entities,
            vec![
                Entity::new("Arbitration Act", "LAW"),
                Entity::new("Acme Ltd", "ORG"),
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_reply_is_error() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_reply("[not json]"));
        let recognizer = LlmEntityRecognizer::new(provider, "ner");

        assert!(recognizer.recognize("Some text.").await.is_err());
    }

    #[tokio::test]
    async fn test_blank_text_skips_model() {
        let provider = Arc::new(MockLlmProvider::new("mock"));
        let recognizer = LlmEntityRecognizer::new(provider.clone(), "ner");

        assert!(recognizer.recognize("  ").await.unwrap().is_empty());
        assert!(provider.requests().is_empty());
    }
}
