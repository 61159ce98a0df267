//! Infrastructure layer - Pipeline stages and model-backed implementations

pub mod capability;
pub mod classifier;
pub mod ingestion;
pub mod llm;
pub mod logging;
pub mod pipeline;
pub mod readability;
pub mod simplifier;
pub mod terms;
pub mod text;

pub use capability::{CapabilityFactory, LazyCapability, ModelCapabilities};
pub use pipeline::ContractPipeline;
