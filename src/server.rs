//! HTTP server initialization and runtime setup.
//!
//! Owns the process-wide lifecycle: connection pool and cache handles are
//! created once at startup, injected into the resolution engine, and torn
//! down after the server stops.

use crate::application::services::ResolutionEngine;
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, DeferredCache, NullCache, RedisCache};
use crate::infrastructure::persistence::PgLinkStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::RandomTokenGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio::task::JoinHandle;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

const CONNECT_ATTEMPTS: usize = 5;

/// Opens the PostgreSQL pool, retrying with exponential backoff.
///
/// # Errors
///
/// Returns an error if every connection attempt fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let url = config.database_url.as_str();
    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(CONNECT_ATTEMPTS);

    let pool = Retry::spawn(strategy, || {
        tracing::debug!("Connecting to database");
        options.clone().connect(url)
    })
    .await
    .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Connects the cache.
///
/// Without a Redis URL caching is disabled via [`NullCache`]. If Redis is
/// configured but unreachable, a [`DeferredCache`] is returned and Redis is
/// retried in the background; the cache reports unhealthy until it attaches.
pub async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Retrying in background.", e);
            let deferred = Arc::new(DeferredCache::new());
            spawn_cache_reconnect(deferred.clone(), redis_url.clone(), config.cache_ttl_seconds);
            deferred
        }
    }
}

/// Keeps trying to reach Redis and attaches it to `slot` once connected.
fn spawn_cache_reconnect(
    slot: Arc<DeferredCache>,
    redis_url: String,
    ttl_seconds: Option<u64>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let url = redis_url.as_str();
        let strategy = ExponentialBackoff::from_millis(500)
            .max_delay(Duration::from_secs(30))
            .map(jitter);

        let connected = Retry::spawn(strategy, || {
            tracing::debug!("Retrying Redis connection");
            RedisCache::connect(url, ttl_seconds)
        })
        .await;

        match connected {
            Ok(redis) => {
                slot.attach(Arc::new(redis));
                tracing::info!("Cache enabled (Redis, reconnected)");
            }
            Err(e) => tracing::error!("Giving up on Redis: {}", e),
        }
    })
}

/// Builds the resolution engine on top of an open pool.
pub async fn build_engine(config: &Config, pool: PgPool) -> ResolutionEngine {
    let store = Arc::new(PgLinkStore::new(Arc::new(pool)));
    let cache = connect_cache(config).await;
    let generator = Arc::new(RandomTokenGenerator::new(config.token_length));

    ResolutionEngine::new(store, cache, generator, config.engine_settings())
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Redis cache (or a deferred slot reconnecting in the background)
/// - Resolution engine
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let engine = build_engine(&config, pool.clone()).await;
    let state = AppState::new(Arc::new(engine), &config.base_url);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
