//! Cache collaborator contract and key derivation.
//!
//! The client treats the cache as an injected capability: any key/value store
//! with passive expiration works. [`InMemoryCache`] is the bundled default;
//! hosts with an external cache service implement [`Cache`] over it.

mod memory;

pub use memory::InMemoryCache;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use md5::{Digest, Md5};

/// Namespace prefix for every key this client writes, keeping its entries
/// apart from unrelated entries in a shared store.
pub const CACHE_KEY_PREFIX: &str = "shortener-client";

/// Key/value store with expiration, supplied by the host application.
///
/// Implementations must be safe for concurrent use; the client is shared
/// across callers and issues cache calls without synchronization. Entries
/// expire passively at their `expires_at` instant; no delete operation is
/// required.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns true when a live entry exists for the key.
    async fn has(&self, key: &str) -> bool;

    /// Returns the value for the key, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores a value, replacing any previous entry, that expires at the
    /// given instant.
    async fn put(&self, key: &str, value: &str, expires_at: DateTime<Utc>);
}

/// Derives the cache key for a long URL: `<prefix>.url.<md5-hex>`.
///
/// The digest is taken over the exact input string, with no normalization:
/// two syntactically different spellings of the same URL cache independently.
pub fn cache_key(url: &str) -> String {
    let digest = Md5::digest(url.as_bytes());
    format!("{}.url.{}", CACHE_KEY_PREFIX, hex::encode(digest))
}
