//! In-process cache backed by a concurrent map.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cache that keeps entries in a [`DashMap`].
///
/// Entries never expire. The cache can be switched offline with
/// [`MemoryCache::set_available`], after which every call fails with
/// [`CacheError::Unavailable`]; this mirrors a Redis outage in tests and
/// local runs.
#[derive(Debug)]
pub struct MemoryCache {
    entries: DashMap<String, String>,
    available: AtomicBool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            available: AtomicBool::new(true),
        }
    }

    /// Toggles simulated reachability.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Drops a single entry, as the cache's own eviction policy would.
    pub fn evict(&self, token: &str) {
        self.entries.remove(token);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ensure_available(&self) -> CacheResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CacheError::Unavailable("memory cache offline".to_string()))
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, token: &str) -> CacheResult<Option<String>> {
        self.ensure_available()?;
        Ok(self.entries.get(token).map(|entry| entry.value().clone()))
    }

    async fn set(&self, token: &str, target: &str) -> CacheResult<()> {
        self.ensure_available()?;
        self.entries.insert(token.to_string(), target.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}
