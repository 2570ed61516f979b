//! Error taxonomy and failed-response classification.
//!
//! Every failure of [`crate::client::ShortenerClient::shorten`] surfaces as one
//! of the four [`ShortenerError`] variants. The client never retries and never
//! swallows a failure; callers decide whether to retry, bypass the cache, or
//! abort.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the shortener client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    /// The caller supplied a string that is not a valid absolute URL.
    /// Detected locally; no cache lookup or network call is made.
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Catch-all for failures without a more specific category: no response
    /// received, malformed success body, or an unparseable error payload.
    #[error("unexpected response from the shortener service")]
    UnexpectedResponse,

    /// The service rejected the configured credentials (HTTP 401).
    #[error("shortener service authentication failed")]
    AuthenticationFailed,

    /// The service reported a business error with a human-readable message,
    /// passed through verbatim.
    #[error("shortener service error: {message}")]
    ApiError { message: String },
}

/// Error payload the service attaches to non-2xx responses.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

/// Classifies a non-2xx response into a [`ShortenerError`].
///
/// A 401 status always wins, even when the body carries a `message` field.
/// For any other status the body must be JSON with a string `message` to
/// count as an [`ShortenerError::ApiError`]; anything else is
/// [`ShortenerError::UnexpectedResponse`].
pub(crate) fn classify_response(status: StatusCode, body: &str) -> ShortenerError {
    if status == StatusCode::UNAUTHORIZED {
        return ShortenerError::AuthenticationFailed;
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message }) => ShortenerError::ApiError { message },
        Err(_) => ShortenerError::UnexpectedResponse,
    }
}
