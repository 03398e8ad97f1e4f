//! No-op cache implementation for disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is not configured. Every lookup is a miss, so all reads go
/// straight to the durable store. Reports healthy, since there is nothing to
/// be down.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _token: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _token: &str, _target: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_never_hits() {
        let cache = NullCache::new();
        cache.set("abc1234", "https://example.com").await.unwrap();

        assert_eq!(cache.get("abc1234").await.unwrap(), None);
        assert!(cache.health_check().await);
    }
}
