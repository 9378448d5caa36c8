//! Session failure causes.
//!
//! A streaming session that does not complete ends with exactly one of these.
//! Malformed frames and a missing `[DONE]` are recovered inside the session
//! and never show up here.

use thiserror::Error;

use crate::traits::HttpError;

/// Terminal failure of a streaming session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Request failed, returned a non-success status, or had no body.
    /// No streaming happened.
    #[error("Request rejected{}: {message}", status_suffix(.status))]
    RequestRejected {
        status: Option<u16>,
        message: String,
    },

    /// Reading the body failed after streaming began.
    #[error("Transport error: {message}")]
    TransportError { message: String },

    /// The caller cancelled the session.
    #[error("Stream cancelled")]
    Cancelled,
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" ({})", code),
        None => String::new(),
    }
}

impl StreamError {
    /// Build a rejection from a failed request.
    pub fn rejected(err: &HttpError) -> Self {
        let status = match err {
            HttpError::ServerError { status, .. } => Some(*status),
            _ => None,
        };
        StreamError::RequestRejected {
            status,
            message: err.to_string(),
        }
    }

    /// Check if a caller-side retry could plausibly succeed.
    ///
    /// The session itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            StreamError::RequestRejected { status, .. } => {
                matches!(status, None | Some(429) | Some(500..=599))
            }
            StreamError::TransportError { .. } => true,
            StreamError::Cancelled => false,
        }
    }

    /// Whether the UI should show an error message for this failure
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, StreamError::Cancelled)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::RequestRejected { .. } => {
                "Failed to get AI response. Please try again.".to_string()
            }
            StreamError::TransportError { .. } => {
                "The connection was interrupted before the answer finished.".to_string()
            }
            StreamError::Cancelled => "Cancelled.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::RequestRejected { .. } => "E_STREAM_REJECTED",
            StreamError::TransportError { .. } => "E_STREAM_TRANSPORT",
            StreamError::Cancelled => "E_STREAM_CANCELLED",
        }
    }
}
