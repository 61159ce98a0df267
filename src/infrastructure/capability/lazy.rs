//! One-time, concurrency-safe loading of optional capabilities

use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::domain::{Capability, DomainError};

type Loader<T> = Box<dyn Fn() -> BoxFuture<'static, Result<Arc<T>, DomainError>> + Send + Sync>;

/// An optional capability resolved at most once per process.
///
/// Concurrent first callers share a single load attempt; every later call reads the cached
/// success or failure. A failed load is never retried.
pub struct LazyCapability<T: ?Sized + Send + Sync + 'static> {
    name: &'static str,
    cell: OnceCell<Capability<T>>,
    loader: Option<Loader<T>>,
}

impl<T: ?Sized + Send + Sync + 'static> fmt::Debug for LazyCapability<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.cell.get() {
            None => "pending",
            Some(Capability::Available(_)) => "available",
            Some(Capability::Unavailable { .. }) => "unavailable",
        };

        f.debug_struct("LazyCapability")
            .field("name", &self.name)
            .field("state", &state)
            .finish()
    }
}

impl<T: ?Sized + Send + Sync + 'static> LazyCapability<T> {
    /// Create a capability loaded on first use
    pub fn new<F, Fut>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<T>, DomainError>> + Send + 'static,
    {
        Self {
            name,
            cell: OnceCell::new(),
            loader: Some(Box::new(move || loader().boxed())),
        }
    }

    /// Create an already-loaded capability
    pub fn available(name: &'static str, instance: Arc<T>) -> Self {
        Self {
            name,
            cell: OnceCell::from(Capability::Available(instance)),
            loader: None,
        }
    }

    /// Create a capability that is permanently missing
    pub fn unavailable(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            cell: OnceCell::from(Capability::unavailable(reason)),
            loader: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve the capability, loading it on the first call
    pub async fn get(&self) -> &Capability<T> {
        self.cell
            .get_or_init(|| async {
                let Some(loader) = self.loader.as_ref() else {
                    return Capability::unavailable("no loader configured");
                };

                match loader().await {
                    Ok(instance) => {
                        info!(capability = self.name, "Capability loaded");
                        Capability::Available(instance)
                    }
                    Err(e) => {
                        warn!(
                            capability = self.name,
                            error = %e,
                            "Capability unavailable, falling back to deterministic mode"
                        );
                        Capability::unavailable(e.to_string())
                    }
                }
            })
            .await
    }

    /// The loaded instance, if the capability is available
    pub async fn instance(&self) -> Option<Arc<T>> {
        self.get().await.as_available().cloned()
    }

    pub async fn is_available(&self) -> bool {
        self.get().await.is_available()
    }

    /// Cached state without triggering a load
    pub fn peek(&self) -> Option<&Capability<T>> {
        self.cell.get()
    }
}
