//! Contract Simplifier
//!
//! Turns legal contract text into an analysed, plain-language rendering:
//! - Clause segmentation with marker heuristics and paragraph fallback
//! - Clause classification (model-backed with keyword-rule fallback)
//! - Legal term glossary with definitions
//! - Sentence-level simplification at three intensity levels
//! - Readability metrics and reading-ease scores

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DocumentInput, DomainError, PipelineResult, SimplificationLevel};
pub use infrastructure::pipeline::ContractPipeline;
