//! Cache slot whose backend is attached after startup.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use std::sync::{Arc, OnceLock};

/// Placeholder for a cache that could not be reached at boot.
///
/// Until a backend is attached every lookup is a miss, writes are dropped
/// and [`CacheService::health_check`] reports `false`, so health endpoints
/// show the cache as down instead of silently disabled. Once attached, all
/// calls are forwarded to the backend. A backend can be attached only once.
#[derive(Default)]
pub struct DeferredCache {
    backend: OnceLock<Arc<dyn CacheService>>,
}

impl DeferredCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the backend. Returns `false` if one was already attached.
    pub fn attach(&self, backend: Arc<dyn CacheService>) -> bool {
        self.backend.set(backend).is_ok()
    }

    pub fn is_attached(&self) -> bool {
        self.backend.get().is_some()
    }
}

#[async_trait]
impl CacheService for DeferredCache {
    async fn get(&self, token: &str) -> CacheResult<Option<String>> {
        match self.backend.get() {
            Some(backend) => backend.get(token).await,
            None => Ok(None),
        }
    }

    async fn set(&self, token: &str, target: &str) -> CacheResult<()> {
        match self.backend.get() {
            Some(backend) => backend.set(token, target).await,
            None => Ok(()),
        }
    }

    async fn health_check(&self) -> bool {
        match self.backend.get() {
            Some(backend) => backend.health_check().await,
            None => false,
        }
    }
}
