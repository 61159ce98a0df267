//! Chat-completion domain models used by the model-backed capabilities

mod message;
mod provider;
mod request;
mod response;

pub use message::{Message, MessageRole};
pub use provider::LlmProvider;
pub use request::{LlmRequest, LlmRequestBuilder};
pub use response::{FinishReason, LlmResponse};

#[cfg(test)]
pub use provider::mock::MockLlmProvider;
