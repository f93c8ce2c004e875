//! Upstream API error types.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors from a single round trip to the commentary API.
///
/// `Status` and `Transport` are kept apart so callers and logs can tell
/// an upstream HTTP failure from a request that never got an answer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The by-id lookup returned 404.
    #[error("Commentary with ID '{id}' not found.")]
    NotFound { id: String },
    /// The id is `.` or `..`, which a URL path cannot carry as a segment.
    #[error("commentary ID '{id}' cannot be used in a request path")]
    UnaddressableId { id: String },
    /// Any other non-success HTTP status.
    #[error("API request failed with status {status}")]
    Status { status: u16 },
    /// Connection, DNS, TLS or timeout failure, or a body that could
    /// not be read.
    #[error("request failed: {message}")]
    Transport { message: String },
    /// The body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The configured base URL is unusable.
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// The HTTP client could not be built.
    #[error("cannot build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// Wraps a reqwest error, keeping its whole cause chain in the message.
    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        Self::Transport {
            message: describe(err),
        }
    }
}

/// Joins an error and its sources with `: `.
fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
