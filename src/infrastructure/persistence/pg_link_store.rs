//! PostgreSQL implementation of the durable link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLinkRecord};
use crate::domain::errors::StoreError;
use crate::domain::repositories::LinkStore;

/// Row shape of the `urls` table.
#[derive(Debug, FromRow)]
struct UrlRow {
    id: i64,
    short_url: String,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for ShortLinkRecord {
    fn from(row: UrlRow) -> Self {
        ShortLinkRecord::new(row.id, row.short_url, row.long_url, row.created_at)
    }
}

/// PostgreSQL store for short links.
///
/// Token uniqueness is enforced by the `urls_short_url_key` constraint; a
/// violating insert surfaces as [`StoreError::Conflict`]. Connections are
/// pooled by the shared [`PgPool`].
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Translates driver errors into the store taxonomy.
pub fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    if let Some(db) = err.as_database_error() {
        if db.is_unique_violation() {
            return StoreError::Conflict;
        }
        return StoreError::Query(db.message().to_string());
    }

    let message = err.to_string();
    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_) => StoreError::Unavailable(message),
        _ => StoreError::Query(message),
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLinkRecord, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (short_url, long_url)
            VALUES ($1, $2)
            RETURNING id, short_url, long_url, created_at
            "#,
        )
        .bind(&new_link.token)
        .bind(&new_link.target)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ShortLinkRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, short_url, long_url, created_at
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ShortLinkRecord::from))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
