//! Builds the optional model capabilities from configuration

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::LazyCapability;
use crate::config::{ModelEndpointConfig, ModelsConfig};
use crate::domain::{
    ClauseClassifier, DomainError, EntityRecognizer, LlmProvider, LlmRequest, Paraphraser,
};
use crate::infrastructure::classifier::LlmClauseClassifier;
use crate::infrastructure::llm::{HttpClient, OpenAiCompatibleProvider};
use crate::infrastructure::simplifier::LlmParaphraser;
use crate::infrastructure::text::LlmEntityRecognizer;

pub const CLAUSE_MODEL: &str = "clause_model";
pub const PARAPHRASER: &str = "paraphraser";
pub const ENTITY_RECOGNIZER: &str = "entity_recognizer";

type Provider = OpenAiCompatibleProvider<HttpClient>;

/// The three model-backed capabilities, each loaded on first use
#[derive(Debug, Clone)]
pub struct ModelCapabilities {
    pub classifier: Arc<LazyCapability<dyn ClauseClassifier>>,
    pub paraphraser: Arc<LazyCapability<dyn Paraphraser>>,
    pub entities: Arc<LazyCapability<dyn EntityRecognizer>>,
}

impl ModelCapabilities {
    /// Every capability missing; the pipeline runs fully deterministic
    pub fn unavailable() -> Self {
        Self {
            classifier: Arc::new(LazyCapability::unavailable(CLAUSE_MODEL, "not configured")),
            paraphraser: Arc::new(LazyCapability::unavailable(PARAPHRASER, "not configured")),
            entities: Arc::new(LazyCapability::unavailable(
                ENTITY_RECOGNIZER,
                "not configured",
            )),
        }
    }
}

/// Factory for model capabilities
#[derive(Debug)]
pub struct CapabilityFactory;

impl CapabilityFactory {
    pub fn from_config(config: &ModelsConfig) -> ModelCapabilities {
        ModelCapabilities {
            classifier: Arc::new(Self::classifier(config.classifier.clone())),
            paraphraser: Arc::new(Self::paraphraser(config.paraphraser.clone())),
            entities: Arc::new(Self::entities(config.entities.clone())),
        }
    }

    fn classifier(config: Option<ModelEndpointConfig>) -> LazyCapability<dyn ClauseClassifier> {
        let Some(config) = config else {
            return LazyCapability::unavailable(CLAUSE_MODEL, "no classifier endpoint configured");
        };

        LazyCapability::new(CLAUSE_MODEL, move || {
            let config = config.clone();
            async move {
                let provider = connect(&config).await?;
                let classifier: Arc<dyn ClauseClassifier> =
                    Arc::new(LlmClauseClassifier::new(provider, config.model));
                Ok(classifier)
            }
        })
    }

    fn paraphraser(config: Option<ModelEndpointConfig>) -> LazyCapability<dyn Paraphraser> {
        let Some(config) = config else {
            return LazyCapability::unavailable(PARAPHRASER, "no paraphraser endpoint configured");
        };

        LazyCapability::new(PARAPHRASER, move || {
            let config = config.clone();
            async move {
                let provider = connect(&config).await?;
                let paraphraser: Arc<dyn Paraphraser> =
                    Arc::new(LlmParaphraser::new(provider, config.model));
                Ok(paraphraser)
            }
        })
    }

    fn entities(config: Option<ModelEndpointConfig>) -> LazyCapability<dyn EntityRecognizer> {
        let Some(config) = config else {
            return LazyCapability::unavailable(
                ENTITY_RECOGNIZER,
                "no entity recognizer endpoint configured",
            );
        };

        LazyCapability::new(ENTITY_RECOGNIZER, move || {
            let config = config.clone();
            async move {
                let provider = connect(&config).await?;
                let recognizer: Arc<dyn EntityRecognizer> =
                    Arc::new(LlmEntityRecognizer::new(provider, config.model));
                Ok(recognizer)
            }
        })
    }
}

/// Create the provider for an endpoint and, when asked, check that it answers
async fn connect(config: &ModelEndpointConfig) -> Result<Arc<Provider>, DomainError> {
    let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;
    let mut provider = OpenAiCompatibleProvider::new(client, &config.base_url);

    if let Some(ref api_key) = config.api_key {
        provider = provider.with_api_key(api_key);
    }

    if config.probe {
        let request = LlmRequest::builder().user("ping").max_tokens(1).build();
        provider.chat(&config.model, request).await?;
        debug!(base_url = %config.base_url, model = %config.model, "Endpoint probe succeeded");
    }

    Ok(Arc::new(provider))
}
