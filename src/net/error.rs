//! Failure classification for outbound fetches.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors from the user-list fetch chain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body was not valid JSON.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser (SSR or native tests).
    #[error("not available on server")]
    Unavailable,
}
