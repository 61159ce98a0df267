use async_trait::async_trait;
use std::fmt::Debug;

use super::{LlmRequest, LlmResponse};
use crate::domain::DomainError;

/// Trait for chat-completion inference endpoints backing the model capabilities
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a chat completion request
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::llm::{FinishReason, Message};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted provider: replies are consumed in order, the last one repeats
    #[derive(Debug)]
    pub struct MockLlmProvider {
        name: &'static str,
        replies: Mutex<VecDeque<Result<(String, FinishReason), String>>>,
        requests: Mutex<Vec<LlmRequest>>,
    }

    impl MockLlmProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                replies: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_reply(self, content: impl Into<String>) -> Self {
            self.replies
                .lock()
                .unwrap()
                .push_back(Ok((content.into(), FinishReason::Stop)));
            self
        }

        /// Reply that stopped at the token limit
        pub fn with_cut_off_reply(self, content: impl Into<String>) -> Self {
            self.replies
                .lock()
                .unwrap()
                .push_back(Ok((content.into(), FinishReason::Length)));
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            self.replies.lock().unwrap().push_back(Err(error.into()));
            self
        }

        pub fn requests(&self) -> Vec<LlmRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
            self.requests.lock().unwrap().push(request);

            let reply = {
                let mut replies = self.replies.lock().unwrap();
                if replies.len() > 1 {
                    replies.pop_front()
                } else {
                    replies.front().cloned()
                }
            };

            match reply {
                Some(Ok((content, finish_reason))) => Ok(LlmResponse::new(
                    "mock-response".to_string(),
                    model.to_string(),
                    Message::assistant(content),
                )
                .with_finish_reason(finish_reason)),
                Some(Err(error)) => Err(DomainError::provider(self.name, error)),
                None => Err(DomainError::provider(self.name, "No mock reply configured")),
            }
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }
    }
}
