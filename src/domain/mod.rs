//! Domain layer - Contract vocabulary, entities and capability traits

pub mod annotation;
pub mod capability;
pub mod clause;
pub mod error;
pub mod ingestion;
pub mod llm;
pub mod pipeline;
pub mod readability;
pub mod simplification;
pub mod terms;

pub use annotation::{Entity, EntityExtraction, EntityRecognizer};
pub use capability::{Capability, CapabilityStatus};
pub use clause::{Clause, ClauseAnnotation, ClauseClassifier, ClauseMarker, ClauseType, Segment};
pub use error::DomainError;
pub use ingestion::{detect_format, DocumentFormat, ExtractedText, TextExtractor};
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole,
};
pub use pipeline::{CapabilityReport, DocumentInput, PipelineResult};
pub use readability::{Metrics, ReadabilityReport};
pub use simplification::{LevelParameters, ParaphraseRequest, Paraphraser, SimplificationLevel};
pub use terms::{LegalTerm, TermSource};
