//! Short link entity representing a token → target URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// Records are created exactly once and never mutated afterwards. The `id` is
/// assigned by the durable store; `token` is the external lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkRecord {
    pub id: i64,
    pub token: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLinkRecord {
    /// Creates a new record instance.
    pub fn new(id: i64, token: String, target: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            token,
            target,
            created_at,
        }
    }
}

/// Input data for inserting a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub token: String,
    pub target: String,
}

impl NewShortLink {
    pub fn new(token: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let now = Utc::now();
        let record = ShortLinkRecord::new(
            1,
            "aZ3kP9q".to_string(),
            "http://example.com/a".to_string(),
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.token, "aZ3kP9q");
        assert_eq!(record.target, "http://example.com/a");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_short_link_creation() {
        let new_link = NewShortLink::new("xyz7890", "https://rust-lang.org");

        assert_eq!(new_link.token, "xyz7890");
        assert_eq!(new_link.target, "https://rust-lang.org");
    }
}
