//! Sentence-level simplification with per-sentence fallback

use std::sync::Arc;
use tracing::{debug, warn};

use super::post_process::post_process;
use crate::domain::simplification::{MIN_PARAPHRASE_LENGTH, PARAPHRASE_TOP_P};
use crate::domain::{ParaphraseRequest, Paraphraser, SimplificationLevel};
use crate::infrastructure::capability::{LazyCapability, PARAPHRASER};
use crate::infrastructure::text::split_sentences;

/// Texts with this many whitespace-delimited words or fewer are returned unchanged
pub const MIN_WORDS_TO_SIMPLIFY: usize = 10;

/// Sentences shorter than this many characters pass through untouched
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Paraphrases must be longer than this many characters
pub const MIN_ACCEPTED_CHARS: usize = 5;

/// Paraphrases may be at most this many times the original sentence length
pub const MAX_EXPANSION_RATIO: f64 = 1.5;

/// Rewrites text sentence by sentence through the paraphraser, keeping originals on failure
#[derive(Debug, Clone)]
pub struct SimplificationService {
    paraphraser: Arc<LazyCapability<dyn Paraphraser>>,
}

impl SimplificationService {
    pub fn new(paraphraser: Arc<LazyCapability<dyn Paraphraser>>) -> Self {
        Self { paraphraser }
    }

    /// Service that returns every text unchanged
    pub fn passthrough() -> Self {
        Self::new(Arc::new(LazyCapability::unavailable(
            PARAPHRASER,
            "not configured",
        )))
    }

    /// Resolve the paraphraser once; returns whether it is available
    pub async fn initialize(&self) -> bool {
        self.paraphraser.is_available().await
    }

    pub async fn simplify(&self, text: &str, level: SimplificationLevel) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let Some(paraphraser) = self.paraphraser.instance().await else {
            return text.to_string();
        };

        if text.split_whitespace().count() <= MIN_WORDS_TO_SIMPLIFY {
            return text.to_string();
        }

        let mut simplified = Vec::new();
        for sentence in split_sentences(text) {
            simplified.push(self.simplify_sentence(paraphraser.as_ref(), sentence, level).await);
        }

        simplified.join(" ")
    }

    async fn simplify_sentence(
        &self,
        paraphraser: &dyn Paraphraser,
        sentence: String,
        level: SimplificationLevel,
    ) -> String {
        let sentence_chars = sentence.trim().chars().count();
        if sentence_chars < MIN_SENTENCE_CHARS {
            return sentence;
        }

        let parameters = level.parameters();
        let request = ParaphraseRequest {
            text: sentence.clone(),
            max_length: parameters.max_length_for(sentence.split_whitespace().count()),
            min_length: MIN_PARAPHRASE_LENGTH,
            temperature: parameters.temperature,
            top_p: PARAPHRASE_TOP_P,
        };

        let output = match paraphraser.paraphrase(request).await {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "Paraphrasing failed, keeping original sentence");
                return sentence;
            }
        };

        let candidate = post_process(output.trim(), level);
        let candidate_chars = candidate.chars().count();
        let limit = sentence.chars().count() as f64 * MAX_EXPANSION_RATIO;

        if candidate_chars > MIN_ACCEPTED_CHARS && candidate_chars as f64 <= limit {
            candidate
        } else {
            debug!(
                original = sentence_chars,
                paraphrased = candidate_chars,
                "Rejected paraphrase length"
            );
            sentence
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simplification::MockParaphraser;
    use crate::domain::DomainError;

    const CLAUSE: &str = "The Contractor shall indemnify the Employer against all claims. \
                          Pursuant to clause 4, payment is due within thirty days herein.";

    fn service_with(mock: MockParaphraser) -> SimplificationService {
        let paraphraser: Arc<dyn Paraphraser> = Arc::new(mock);
        SimplificationService::new(Arc::new(LazyCapability::available(PARAPHRASER, paraphraser)))
    }

    #[tokio::test]
    async fn test_without_paraphraser_text_is_unchanged() {
        let service = SimplificationService::passthrough();

        assert!(!service.initialize().await);
        for level in SimplificationLevel::ALL {
            assert_eq!(service.simplify(CLAUSE, level).await, CLAUSE);
            assert_eq!(service.simplify("  ", level).await, "  ");
        }
    }

    #[tokio::test]
    async fn test_short_text_is_unchanged() {
        let mut mock = MockParaphraser::new();
        mock.expect_paraphrase().never();

        let service = service_with(mock);
        let text = "The Contractor shall indemnify the Employer.";
        assert_eq!(service.simplify(text, SimplificationLevel::Advanced).await, text);
    }

    #[tokio::test]
    async fn test_sentences_are_paraphrased_with_level_parameters() {
        let mut mock = MockParaphraser::new();
        mock.expect_paraphrase()
            .withf(|request| {
                request.temperature == 0.7
                    && request.top_p == 0.95
                    && request.min_length == 10
                    && request.max_length == 15
            })
            .times(2)
            .returning(|request| {
                if request.text.starts_with("The Contractor") {
                    Ok("The Contractor covers the Employer's losses.".to_string())
                } else {
                    Ok(" Pursuant to clause 4, pay herein within 30 days. ".to_string())
                }
            });

        let service = service_with(mock);
        let result = service.simplify(CLAUSE, SimplificationLevel::Intermediate).await;

        assert_eq!(
            result,
            "The Contractor covers the Employer's losses. According to clause 4, pay here within 30 days."
        );
    }

    #[tokio::test]
    async fn test_failures_and_rejections_keep_original_sentence() {
        let mut mock = MockParaphraser::new();
        mock.expect_paraphrase().times(2).returning(|request| {
            if request.text.starts_with("The Contractor") {
                Err(DomainError::provider("mock", "inference failed"))
            } else {
                Ok("x".repeat(500))
            }
        });

        let service = service_with(mock);
        let result = service.simplify(CLAUSE, SimplificationLevel::Basic).await;

        assert_eq!(
            result,
            "The Contractor shall indemnify the Employer against all claims. \
             Pursuant to clause 4, payment is due within thirty days herein."
        );
    }

    #[tokio::test]
    async fn test_short_sentences_pass_through() {
        let mut mock = MockParaphraser::new();
        mock.expect_paraphrase()
            .times(1)
            .returning(|_| Ok("Either side can end the deal early.".to_string()));

        let service = service_with(mock);
        let text = "Read this. Either party may terminate this agreement at any time before completion.";

        assert_eq!(
            service.simplify(text, SimplificationLevel::Basic).await,
            "Read this. Either side can end the deal early."
        );
    }
}
