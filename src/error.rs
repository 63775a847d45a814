//! Error types for betafeed

use thiserror::Error;

/// Result type alias using betafeed's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while querying the remote tag listing
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failure (connect, timeout, TLS)
    #[error("tag listing request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the API
    #[error("tag listing returned {status}")]
    Status { status: reqwest::StatusCode },

    /// The API answered with an empty body
    #[error("tag listing response body was empty")]
    EmptyBody,

    /// The response body was not a valid tag array
    #[error("tag listing parse error: {0}")]
    Json(#[from] serde_json::Error),
}
