//! Handlers for liveness and health endpoints.

use axum::{Json, extract::State, http::StatusCode};
use std::env;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, LivenessResponse};
use crate::state::AppState;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /`
pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "running".to_string(),
        message: "URL Shortener API is active!".to_string(),
        pod_name: env::var("HOSTNAME").unwrap_or_else(|_| "localmachine".to_string()),
    })
}

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store and cache healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// A degraded cache does not stop the service from answering requests; the
/// status only reports it.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = check_store(&state).await;
    let cache = check_cache(&state).await;

    let all_healthy = store.is_ok() && cache.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store, cache },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports cache reachability alone.
///
/// # Endpoint
///
/// `GET /health/cache`
pub async fn cache_check_handler(
    State(state): State<AppState>,
) -> Result<Json<CheckStatus>, (StatusCode, Json<CheckStatus>)> {
    let cache = check_cache(&state).await;

    if cache.is_ok() {
        Ok(Json(cache))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(cache)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    if state.engine.store_healthy().await {
        CheckStatus::ok("Store connected")
    } else {
        CheckStatus::error("Store connection failed")
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    if state.engine.cache_healthy().await {
        CheckStatus::ok("Cache connected")
    } else {
        CheckStatus::error("Cache connection failed")
    }
}
