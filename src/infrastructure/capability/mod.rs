//! Optional model capabilities: lazy loading and construction from configuration

mod factory;
mod lazy;

pub use factory::{
    CapabilityFactory, ModelCapabilities, CLAUSE_MODEL, ENTITY_RECOGNIZER, PARAPHRASER,
};
pub use lazy::LazyCapability;
