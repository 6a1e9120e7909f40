//! Lesson fetch error types.
//!
//! Classified so callers can tell transport trouble from bad data without
//! string matching. None of these are fatal: every fetch failure degrades
//! to an empty or not-found view upstream.

use thiserror::Error;

/// Errors that can occur when fetching the lesson list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("API error (HTTP {status})")]
    Api { status: u16 },

    /// The body could not be decoded as a JSON array of lessons.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl FetchError {
    /// Returns `true` when the failure happened before any body arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Timeout(_) | FetchError::Network(_))
    }
}
