//! Clause domain types: taxonomy, segments, records and the classifier seam

mod classifier;
mod clause_type;
mod entity;

pub use classifier::ClauseClassifier;
pub use clause_type::ClauseType;
pub use entity::{Clause, ClauseAnnotation, ClauseMarker, Segment};

#[cfg(test)]
pub use classifier::mock::MockClauseClassifier;
