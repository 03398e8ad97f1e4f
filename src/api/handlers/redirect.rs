//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a token to its original URL.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// Cache lookup, store fallback and backfill are handled by
/// [`crate::application::services::ResolutionEngine::resolve`].
///
/// # Errors
///
/// - 404 Not Found if the token is unknown
/// - 503 Service Unavailable if the cache missed and the store is unreachable
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.engine.resolve(&token).await?;

    Ok(Redirect::temporary(&target))
}
