//! In-memory cache implementation backed by a map with expiry timestamps.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use super::Cache;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// A process-local [`Cache`] keeping entries in a mutex-guarded map.
///
/// Expired entries are evicted lazily on read; there is no background sweep.
/// Suitable as a default for hosts without an external cache service.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn has(&self, key: &str) -> bool {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Utc::now() => true,
            Some(_) => {
                entries.remove(key);
                false
            }
            None => false,
        }
    }

    async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Utc::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    async fn put(&self, key: &str, value: &str, expires_at: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = InMemoryCache::new();
        cache
            .put("key", "value", Utc::now() + TimeDelta::days(1))
            .await;

        assert!(cache.has("key").await);
        assert_eq!(cache.get("key").await, Some("value".to_string()));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let cache = InMemoryCache::new();
        assert!(!cache.has("absent").await);
        assert_eq!(cache.get("absent").await, None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let cache = InMemoryCache::new();
        cache
            .put("key", "value", Utc::now() - TimeDelta::seconds(1))
            .await;

        assert!(!cache.has("key").await);
        assert_eq!(cache.get("key").await, None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = InMemoryCache::new();
        let expiry = Utc::now() + TimeDelta::days(1);
        cache.put("key", "old", expiry).await;
        cache.put("key", "new", expiry).await;

        assert_eq!(cache.get("key").await, Some("new".to_string()));
    }
}
