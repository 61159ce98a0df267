use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// One sentence to rewrite, with generation limits
#[derive(Debug, Clone, PartialEq)]
pub struct ParaphraseRequest {
    pub text: String,
    pub max_length: usize,
    pub min_length: usize,
    pub temperature: f32,
    pub top_p: f32,
}

/// Rewrites a sentence in plainer language
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Paraphraser: Send + Sync {
    /// Paraphrase a single sentence
    async fn paraphrase(&self, request: ParaphraseRequest) -> Result<String, DomainError>;

    /// Get the paraphraser name
    fn paraphraser_name(&self) -> &'static str;
}
