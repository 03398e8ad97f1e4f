//! Error taxonomy shared by the store adapters and the resolution engine.

use thiserror::Error;

/// Failures reported by a [`crate::domain::repositories::LinkStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The token is already taken (unique constraint violation).
    #[error("token already exists")]
    Conflict,
    /// The backing store cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The call did not complete in time; its outcome is unknown.
    #[error("store operation timed out: {0}")]
    Timeout(String),
    /// The store answered with an error unrelated to connectivity.
    #[error("store query failed: {0}")]
    Query(String),
}

/// Failures reported by a [`crate::infrastructure::cache::CacheService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("cache unavailable: {0}")]
    Unavailable(String),
    #[error("cache operation timed out")]
    Timeout,
}

/// Errors surfaced by [`crate::application::services::ResolutionEngine`].
///
/// Cache failures never appear here: they are recovered inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("target URL must not be empty")]
    InvalidInput,
    /// The target cannot be carried in a `Location` header.
    #[error("target URL contains characters that cannot be redirected to")]
    InvalidTarget,
    #[error("could not allocate a unique token after {attempts} attempts")]
    CreateFailed { attempts: u32 },
    #[error(transparent)]
    StoreUnavailable(StoreError),
    #[error("short link '{0}' not found")]
    NotFound(String),
}

impl From<StoreError> for ResolveError {
    fn from(err: StoreError) -> Self {
        Self::StoreUnavailable(err)
    }
}
