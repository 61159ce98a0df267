//! Optional capabilities and their availability report

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of initializing an optional capability
#[derive(Debug)]
pub enum Capability<T: ?Sized> {
    Available(Arc<T>),
    Unavailable { reason: String },
}

impl<T: ?Sized> Capability<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn as_available(&self) -> Option<&Arc<T>> {
        match self {
            Self::Available(inner) => Some(inner),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }
}

impl<T: ?Sized> Clone for Capability<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Available(inner) => Self::Available(Arc::clone(inner)),
            Self::Unavailable { reason } => Self::Unavailable {
                reason: reason.clone(),
            },
        }
    }
}

/// Which model-backed capabilities are live; anything false runs in degraded mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityStatus {
    pub clause_model: bool,
    pub paraphraser: bool,
    pub entity_recognizer: bool,
}

impl CapabilityStatus {
    pub fn is_degraded(&self) -> bool {
        !(self.clause_model && self.paraphraser && self.entity_recognizer)
    }
}
