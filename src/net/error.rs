//! Error taxonomy for the network layer.
//!
//! Network failures are values, not panics: every request resolves to a
//! `Result` that reducers fold back into screen state (typically a toast).

use thiserror::Error;

/// Errors that can occur while issuing a typed request.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Transport-level failure (DNS, TLS, connection reset).
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status.
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected payload shape.
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    /// A bearer-authenticated request was issued with no signed-in session.
    #[error("Access token not set")]
    MissingAccessToken,

    /// The request could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
