//! Fast cache layer for token lookups.
//!
//! Provides a [`CacheService`] trait with these implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`MemoryCache`] - In-process map, used by tests and local runs
//! - [`NullCache`] - No-op implementation for disabled caching
//! - [`DeferredCache`] - Stand-in for a Redis that was down at boot

mod deferred_cache;
mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use deferred_cache::DeferredCache;
pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
