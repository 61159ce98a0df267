//! Clause classification strategy trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::ClauseType;
use crate::domain::DomainError;

/// Assigns one taxonomy label to a clause
#[async_trait]
pub trait ClauseClassifier: Send + Sync + Debug {
    /// Classify a single clause
    async fn classify(&self, text: &str) -> Result<ClauseType, DomainError>;

    /// Get the classifier name
    fn classifier_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock classifier returning a fixed label or a fixed error
    #[derive(Debug)]
    pub struct MockClauseClassifier {
        label: ClauseType,
        error: Option<String>,
        calls: AtomicUsize,
    }

    impl MockClauseClassifier {
        pub fn new(label: ClauseType) -> Self {
            Self {
                label,
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(error: impl Into<String>) -> Self {
            Self {
                label: ClauseType::Other,
                error: Some(error.into()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ClauseClassifier for MockClauseClassifier {
        async fn classify(&self, _text: &str) -> Result<ClauseType, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match self.error {
                Some(ref error) => Err(DomainError::provider("mock", error)),
                None => Ok(self.label),
            }
        }

        fn classifier_name(&self) -> &'static str {
            "mock"
        }
    }
}
