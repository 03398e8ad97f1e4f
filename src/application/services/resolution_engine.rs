//! Create/resolve orchestration across the fast cache and the durable store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tracing::{debug, error, info, warn};

use crate::domain::entities::NewShortLink;
use crate::domain::errors::{CacheError, ResolveError, StoreError};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::cache::CacheService;
use crate::utils::token_generator::TokenGenerator;

/// Tunables for [`ResolutionEngine`].
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Number of tokens tried before `create` gives up on collisions.
    pub max_create_attempts: u32,
    /// Upper bound for a single store call.
    pub store_timeout: Duration,
    /// Upper bound for a single cache call.
    pub cache_timeout: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_create_attempts: 5,
            store_timeout: Duration::from_secs(5),
            cache_timeout: Duration::from_millis(500),
        }
    }
}

/// Coordinates writes and lookups between the cache and the durable store.
///
/// # Consistency
///
/// - `create` writes the store first and only then mirrors the pair into the
///   cache, so a cache entry never exists without a durable record.
/// - `resolve` checks the cache first; on a miss it reads the store and
///   backfills the cache.
/// - Misses are never cached.
///
/// Cache failures (errors or timeouts) are logged and degrade to the store
/// path. Store failures are surfaced to the caller. The engine holds no
/// mutable state of its own; token uniqueness is delegated to the store.
pub struct ResolutionEngine {
    store: Arc<dyn LinkStore>,
    cache: Arc<dyn CacheService>,
    generator: Arc<dyn TokenGenerator>,
    settings: EngineSettings,
}

impl ResolutionEngine {
    pub fn new(
        store: Arc<dyn LinkStore>,
        cache: Arc<dyn CacheService>,
        generator: Arc<dyn TokenGenerator>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            store,
            cache,
            generator,
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Creates a short link for `target` and returns its token.
    ///
    /// The target is stored verbatim. It must be non-blank and usable as a
    /// `Location` header value, otherwise the token could never redirect.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidInput`] if `target` is empty or whitespace
    /// - [`ResolveError::InvalidTarget`] if `target` contains control characters
    /// - [`ResolveError::CreateFailed`] if every attempt collided
    /// - [`ResolveError::StoreUnavailable`] on store failure or timeout. A
    ///   timed-out insert is not retried since its outcome is unknown.
    pub async fn create(&self, target: &str) -> Result<String, ResolveError> {
        if target.trim().is_empty() {
            return Err(ResolveError::InvalidInput);
        }
        if HeaderValue::from_str(target).is_err() {
            return Err(ResolveError::InvalidTarget);
        }

        let attempts = self.settings.max_create_attempts;

        for attempt in 1..=attempts {
            let token = self.generator.generate();
            let insert = self.store.insert(NewShortLink::new(token, target));

            match self.store_call(insert).await {
                Ok(record) => {
                    self.populate_cache(&record.token, &record.target).await;
                    info!(token = %record.token, id = record.id, "Short link created");
                    return Ok(record.token);
                }
                Err(StoreError::Conflict) => {
                    warn!(attempt, "Token collision, regenerating");
                }
                Err(e) => {
                    error!("Store insert failed: {}", e);
                    return Err(e.into());
                }
            }
        }

        error!(attempts, "Exhausted token generation attempts");
        Err(ResolveError::CreateFailed { attempts })
    }

    /// Resolves `token` to its target URL.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NotFound`] if neither tier knows the token
    /// - [`ResolveError::StoreUnavailable`] if the cache missed and the store
    ///   failed or timed out
    pub async fn resolve(&self, token: &str) -> Result<String, ResolveError> {
        if token.is_empty() {
            return Err(ResolveError::NotFound(String::new()));
        }

        if let Some(target) = self.cached_target(token).await {
            debug!("Cache HIT for {}", token);
            return Ok(target);
        }
        debug!("Cache MISS for {}", token);

        let record = self
            .store_call(self.store.find_by_token(token))
            .await
            .inspect_err(|e| error!("Store lookup failed for {}: {}", token, e))?
            .ok_or_else(|| ResolveError::NotFound(token.to_string()))?;

        self.populate_cache(token, &record.target).await;

        Ok(record.target)
    }

    /// Number of durable records.
    pub async fn record_count(&self) -> Result<i64, ResolveError> {
        Ok(self.store_call(self.store.count()).await?)
    }

    pub async fn store_healthy(&self) -> bool {
        tokio::time::timeout(self.settings.store_timeout, self.store.health_check())
            .await
            .unwrap_or(false)
    }

    pub async fn cache_healthy(&self) -> bool {
        tokio::time::timeout(self.settings.cache_timeout, self.cache.health_check())
            .await
            .unwrap_or(false)
    }

    async fn store_call<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        let limit = self.settings.store_timeout;
        tokio::time::timeout(limit, call)
            .await
            .unwrap_or_else(|_| Err(StoreError::Timeout(format!("no response within {:?}", limit))))
    }

    async fn cache_call<T>(
        &self,
        call: impl Future<Output = Result<T, CacheError>>,
    ) -> Result<T, CacheError> {
        tokio::time::timeout(self.settings.cache_timeout, call)
            .await
            .unwrap_or(Err(CacheError::Timeout))
    }

    /// Cache lookup that treats any failure as a miss.
    async fn cached_target(&self, token: &str) -> Option<String> {
        match self.cache_call(self.cache.get(token)).await {
            Ok(target) => target,
            Err(e) => {
                warn!("Cache read failed for {}, falling back to store: {}", token, e);
                None
            }
        }
    }

    /// Best-effort cache write.
    async fn populate_cache(&self, token: &str, target: &str) {
        if let Err(e) = self.cache_call(self.cache.set(token, target)).await {
            warn!("Cache write failed for {}: {}", token, e);
        }
    }
}
