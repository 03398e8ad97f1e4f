//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Liveness
//! - `GET  /health`       - Store and cache health
//! - `GET  /health/cache` - Cache reachability
//! - `POST /shorten`      - Create a short URL
//! - `GET  /{token}`      - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    cache_check_handler, health_handler, liveness_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(liveness_handler))
        .route("/health", get(health_handler))
        .route("/health/cache", get(cache_check_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{token}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
