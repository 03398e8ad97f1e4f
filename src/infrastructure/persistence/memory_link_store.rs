//! In-memory implementation of the link store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use crate::domain::entities::{NewShortLink, ShortLinkRecord};
use crate::domain::errors::StoreError;
use crate::domain::repositories::LinkStore;

/// Link store kept in process memory.
///
/// Not durable: contents vanish with the process. Uniqueness is enforced
/// atomically per token through [`DashMap::entry`], so it behaves like the
/// PostgreSQL unique constraint under concurrent inserts. Call counters and a
/// reachability switch make it usable as an observable fake in tests.
#[derive(Debug)]
pub struct MemoryLinkStore {
    records: DashMap<String, ShortLinkRecord>,
    next_id: AtomicI64,
    available: AtomicBool,
    inserts: AtomicUsize,
    lookups: AtomicUsize,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
            available: AtomicBool::new(true),
            inserts: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Toggles simulated reachability.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of `insert` calls received, including conflicting ones.
    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    /// Number of `find_by_token` calls received.
    pub fn lookup_calls(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Snapshot of all stored records, ordered by id.
    pub fn records(&self) -> Vec<ShortLinkRecord> {
        let mut records: Vec<ShortLinkRecord> =
            self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by_key(|r| r.id);
        records
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store offline".to_string()))
        }
    }
}

impl Default for MemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLinkRecord, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;

        match self.records.entry(new_link.token) {
            Entry::Occupied(_) => Err(StoreError::Conflict),
            Entry::Vacant(slot) => {
                let record = ShortLinkRecord::new(
                    self.next_id.fetch_add(1, Ordering::SeqCst),
                    slot.key().clone(),
                    new_link.target,
                    Utc::now(),
                );
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ShortLinkRecord>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;

        Ok(self.records.get(token).map(|r| r.value().clone()))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.ensure_available()?;
        Ok(self.records.len() as i64)
    }

    async fn health_check(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryLinkStore::new();

        let first = store
            .insert(NewShortLink::new("aaaaaaa", "https://a.example"))
            .await
            .unwrap();
        let second = store
            .insert(NewShortLink::new("bbbbbbb", "https://b.example"))
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_token_conflicts() {
        let store = MemoryLinkStore::new();
        store
            .insert(NewShortLink::new("aaaaaaa", "https://a.example"))
            .await
            .unwrap();

        let result = store
            .insert(NewShortLink::new("aaaaaaa", "https://other.example"))
            .await;

        assert_eq!(result, Err(StoreError::Conflict));
        let stored = store.find_by_token("aaaaaaa").await.unwrap().unwrap();
        assert_eq!(stored.target, "https://a.example");
    }

    #[tokio::test]
    async fn test_offline_store_is_unavailable() {
        let store = MemoryLinkStore::new();
        store.set_available(false);

        assert!(matches!(
            store.find_by_token("aaaaaaa").await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(!store.health_check().await);
        assert_eq!(store.lookup_calls(), 1);
    }
}
