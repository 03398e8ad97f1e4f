//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:3000/aZ3kP9q" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not a JSON object, or `url` is missing,
///   `null`, not a string, empty, or contains control characters
/// - 503 Service Unavailable if the store is unreachable or timed out
/// - 500 Internal Server Error if no unique token could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let token = state
        .engine
        .create(payload.url.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&token),
    }))
}
