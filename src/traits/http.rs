//! HTTP transport trait abstraction.
//!
//! Provides a trait-based abstraction for the one request the tutor makes,
//! enabling dependency injection and mocking in tests.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::collections::HashMap;
use std::pin::Pin;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// Ordered source of body chunks. Ends with `None` on graceful close.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpError>> + Send>>;

/// Response to a streaming request: status plus an unread body.
pub struct StreamResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Body chunks, `None` when the response carried no readable body
    pub body: Option<ByteStream>,
}

impl StreamResponse {
    /// Create a response with a body.
    pub fn new(status: u16, body: ByteStream) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Some(body),
        }
    }

    /// Create a response with no body.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl std::fmt::Debug for StreamResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

/// HTTP client errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// Connection failed
    ConnectionFailed(String),
    /// Request timeout
    Timeout(String),
    /// Server returned an error status
    ServerError { status: u16, message: String },
    /// IO error while reading the body
    Io(String),
    /// Invalid URL
    InvalidUrl(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            HttpError::Io(msg) => write!(f, "IO error: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for the streaming HTTP transport.
///
/// Implementations include the production reqwest-based client and a mock
/// client for tests. A non-success status may be reported either through
/// [`StreamResponse::status`] or as [`HttpError::ServerError`]; sessions treat
/// both as a rejected request.
///
/// # Example
///
/// ```ignore
/// use steptutor::traits::{HttpClient, Headers, HttpError};
///
/// async fn first_chunk<C: HttpClient>(client: &C) -> Result<(), HttpError> {
///     let response = client
///         .post_stream("https://tutor.example.com/ask", "{}", &Headers::new())
///         .await?;
///     println!("status: {}", response.status);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a POST request and return the response with its body unread.
    ///
    /// # Arguments
    /// * `url` - The URL to request
    /// * `body` - Request body as a string
    /// * `headers` - Request headers
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<StreamResponse, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[test]
    fn test_stream_response_new() {
        let body: ByteStream = Box::pin(stream::empty());
        let response = StreamResponse::new(200, body);
        assert_eq!(response.status, 200);
        assert!(response.headers.is_empty());
        assert!(response.body.is_some());
    }

    #[test]
    fn test_stream_response_empty() {
        let response = StreamResponse::empty(204);
        assert!(response.body.is_none());
        assert!(response.is_success());
    }

    #[test]
    fn test_stream_response_is_success() {
        assert!(StreamResponse::empty(200).is_success());
        assert!(StreamResponse::empty(299).is_success());
        assert!(!StreamResponse::empty(300).is_success());
        assert!(!StreamResponse::empty(404).is_success());
        assert!(!StreamResponse::empty(500).is_success());
    }

    #[test]
    fn test_stream_response_debug_hides_body() {
        let response = StreamResponse::empty(500);
        let debug = format!("{:?}", response);
        assert!(debug.contains("status: 500"));
        assert!(debug.contains("has_body: false"));
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("timeout".to_string()).to_string(),
            "Connection failed: timeout"
        );
        assert_eq!(
            HttpError::ServerError {
                status: 500,
                message: "Internal Error".to_string()
            }
            .to_string(),
            "Server error (500): Internal Error"
        );
        assert_eq!(
            HttpError::Io("read failed".to_string()).to_string(),
            "IO error: read failed"
        );
    }
}
