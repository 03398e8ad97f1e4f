//! Durable store contract for short links.

use crate::domain::entities::{NewShortLink, ShortLinkRecord};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Authoritative, persistent mapping from token to target URL.
///
/// Token uniqueness is enforced here and nowhere else: concurrent inserts of
/// the same token must resolve to exactly one success and one
/// [`StoreError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - In-process, non-durable
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a new record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Conflict`] if the token already exists
    /// - [`StoreError::Unavailable`] / [`StoreError::Timeout`] on connectivity failure
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLinkRecord, StoreError>;

    /// Looks up a record by token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on connectivity failure.
    async fn find_by_token(&self, token: &str) -> Result<Option<ShortLinkRecord>, StoreError>;

    /// Counts stored records.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Checks that the backing store answers queries.
    async fn health_check(&self) -> bool;
}
