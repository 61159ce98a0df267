//! Clients for OpenAI-compatible inference endpoints

mod http_client;
mod openai;

pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::OpenAiCompatibleProvider;

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
