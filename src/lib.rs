//! Client for a remote URL-shortening service.
//!
//! Validates a long URL, calls the remote API to obtain its shortened form,
//! caches the result for a day, and maps failures into a small typed error
//! taxonomy. The HTTP transport and the cache store are injected
//! collaborators: the transport is a pooled [`reqwest::Client`], the cache is
//! anything implementing [`cache::Cache`].
//!
//! ```no_run
//! use shortener_client::{InMemoryCache, ShortenerClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), shortener_client::ShortenerError> {
//! let client = ShortenerClient::new(
//!     "https://shortener.example.com",
//!     "username",
//!     "password",
//!     Arc::new(InMemoryCache::new()),
//! );
//! let short_url = client.shorten("https://example.com/a/very/long/path", true).await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod error;

pub use cache::{Cache, InMemoryCache};
pub use client::ShortenerClient;
pub use error::ShortenerError;
