//! Clause classification strategies

mod model;
mod rule_based;
mod service;

pub use model::LlmClauseClassifier;
pub use rule_based::{classify_by_rules, RuleBasedClassifier, CLAUSE_RULES};
pub use service::ClassificationService;
