//! Cache service trait.

use async_trait::async_trait;

pub use crate::domain::errors::CacheError;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Volatile key/value layer fronting the durable store.
///
/// Implementations report connectivity problems as [`CacheError::Unavailable`]
/// instead of swallowing them; the resolution engine decides how to degrade.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
/// - [`crate::infrastructure::cache::DeferredCache`] - Backend attached after startup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached target for `token`, or `None` on a miss.
    async fn get(&self, token: &str) -> CacheResult<Option<String>>;

    /// Stores the `(token, target)` pair.
    async fn set(&self, token: &str, target: &str) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
