//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, info};

const KEY_PREFIX: &str = "url:";

/// Redis cache implementation for fast token lookups.
///
/// Uses `ConnectionManager`, which multiplexes one connection and reconnects
/// on failure, so the handle is cheap to clone per call. Errors are returned
/// to the caller as [`CacheError::Unavailable`].
pub struct RedisCache {
    client: ConnectionManager,
    ttl_seconds: Option<u64>,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - Optional expiry for cached entries; `None` leaves
    ///   eviction entirely to Redis' memory policy
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: Option<u64>) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::Unavailable(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
        })
    }
}

/// Constructs the full Redis key with namespace prefix.
fn build_key(token: &str) -> String {
    format!("{}{}", KEY_PREFIX, token)
}

fn unavailable(e: RedisError) -> CacheError {
    CacheError::Unavailable(e.to_string())
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, token: &str) -> CacheResult<Option<String>> {
        let mut conn = self.client.clone();
        let value = conn
            .get::<_, Option<String>>(build_key(token))
            .await
            .map_err(unavailable)?;

        match &value {
            Some(_) => debug!("Cache HIT: {}", token),
            None => debug!("Cache MISS: {}", token),
        }

        Ok(value)
    }

    async fn set(&self, token: &str, target: &str) -> CacheResult<()> {
        let key = build_key(token);
        let mut conn = self.client.clone();

        match self.ttl_seconds {
            Some(ttl) => conn.set_ex::<_, _, ()>(&key, target, ttl).await,
            None => conn.set::<_, _, ()>(&key, target).await,
        }
        .map_err(unavailable)?;

        debug!("Cache SET: {} (ttl: {:?})", token, self.ttl_seconds);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
