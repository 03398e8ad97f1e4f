//! HTTP-facing error type.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::errors::ResolveError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Unavailable { message, details } => {
                ("service_unavailable", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::InvalidInput => {
                AppError::bad_request("URL not provided", json!({ "field": "url" }))
            }
            ResolveError::InvalidTarget => AppError::bad_request(
                "URL contains characters that are not allowed",
                json!({ "field": "url" }),
            ),
            ResolveError::NotFound(token) => {
                AppError::not_found("Short URL not found", json!({ "token": token }))
            }
            ResolveError::StoreUnavailable(e) => {
                AppError::unavailable("Storage unavailable", json!({ "reason": e.to_string() }))
            }
            ResolveError::CreateFailed { attempts } => AppError::internal(
                "Failed to generate unique token",
                json!({ "attempts": attempts }),
            ),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StoreError;

    #[test]
    fn test_resolve_error_status_mapping() {
        assert_eq!(
            AppError::from(ResolveError::InvalidInput).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ResolveError::InvalidTarget).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ResolveError::NotFound("abc1234".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(ResolveError::StoreUnavailable(StoreError::Timeout(
                "5s".into()
            )))
            .status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(ResolveError::CreateFailed { attempts: 5 }).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::from(ResolveError::NotFound("abc1234".into())).to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.details["token"], "abc1234");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("URL not provided", json!({}));
        assert_eq!(err.to_string(), "URL not provided");
    }
}
