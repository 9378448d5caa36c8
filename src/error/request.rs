//! Errors raised while building an outbound request.

use thiserror::Error;

/// Problems detected before any network traffic.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The question was empty or whitespace only.
    #[error("Please enter a question")]
    EmptyQuestion,

    /// The request body could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),
}
