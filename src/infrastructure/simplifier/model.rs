//! Model-backed paraphraser

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::{DomainError, ParaphraseRequest, Paraphraser};

const SYSTEM_PROMPT: &str = "You rewrite sentences from legal contracts in plain, simple English. \
     Keep the legal meaning, names and numbers. Reply with the rewritten sentence only.";

/// Paraphraser backed by a chat-completion endpoint
#[derive(Debug)]
pub struct LlmParaphraser<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> LlmParaphraser<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    fn build_request(request: &ParaphraseRequest) -> LlmRequest {
        let instruction = format!(
            "Use between {} and {} words.\n\n{}",
            request.min_length, request.max_length, request.text
        );

        LlmRequest::builder()
            .system(SYSTEM_PROMPT)
            .user(instruction)
            .temperature(request.temperature)
            .top_p(request.top_p)
            .max_tokens(request.max_length as u32)
            .build()
    }
}

#[async_trait]
impl<P: LlmProvider> Paraphraser for LlmParaphraser<P> {
    async fn paraphrase(&self, request: ParaphraseRequest) -> Result<String, DomainError> {
        let response = self
            .provider
            .chat(&self.model, Self::build_request(&request))
            .await?;

        if response.is_cut_off() {
            return Err(DomainError::provider(
                "paraphraser",
                format!("Paraphrase cut off ({:?})", response.finish_reason),
            ));
        }

        response
            .content()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(String::from)
            .ok_or_else(|| DomainError::provider("paraphraser", "Empty paraphrase from model"))
    }

    fn paraphraser_name(&self) -> &'static str {
        "model"
    }
}
