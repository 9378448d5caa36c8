//! Mock HTTP transport for testing.
//!
//! Provides a configurable mock client that plays back scripted response
//! bodies chunk by chunk, including mid-stream failures and bodies that
//! never end.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::traits::{ByteStream, Headers, HttpClient, HttpError, StreamResponse};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: String,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 response whose body yields these chunks, then ends
    Stream(Vec<Bytes>),
    /// 200 response that yields these chunks, then fails with the error
    StreamThenError(Vec<Bytes>, HttpError),
    /// 200 response that yields these chunks, then never yields again
    StreamThenPending(Vec<Bytes>),
    /// Response with the given status and an empty body
    Status(u16),
    /// Response with the given status and no readable body
    NoBody(u16),
    /// The request itself fails
    Error(HttpError),
}

impl MockResponse {
    /// Stream response built from string chunks
    pub fn chunks<I, T>(chunks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        MockResponse::Stream(
            chunks
                .into_iter()
                .map(|c| Bytes::from(c.into()))
                .collect(),
        )
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use steptutor::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_default_response(MockResponse::chunks(["data: [DONE]\n"]));
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Number of body chunks handed out across all responses
    chunks_read: Arc<AtomicUsize>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
            chunks_read: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a client that answers every request with `response`.
    pub fn with_default(response: MockResponse) -> Self {
        let client = Self::new();
        client.set_default_response(response);
        client
    }

    /// Set a response for a specific URL.
    ///
    /// The URL must match exactly; other URLs get the default response.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of body chunks consumers have pulled so far.
    pub fn chunks_read(&self) -> usize {
        self.chunks_read.load(Ordering::SeqCst)
    }

    fn record_request(&self, url: &str, headers: &Headers, body: &str) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: "POST".to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });
    }

    /// Get the response for a URL.
    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    /// Wrap scripted chunks so every pulled chunk is counted.
    fn counted(&self, chunks: Vec<Bytes>) -> impl futures::Stream<Item = Result<Bytes, HttpError>> {
        let counter = Arc::clone(&self.chunks_read);
        stream::iter(chunks).map(move |chunk| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(chunk)
        })
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<StreamResponse, HttpError> {
        self.record_request(url, headers, body);

        let response = self
            .get_response(url)
            .ok_or_else(|| HttpError::Other(format!("No mock response for URL: {}", url)))?;

        let stream: ByteStream = match response {
            MockResponse::Stream(chunks) => Box::pin(self.counted(chunks)),
            MockResponse::StreamThenError(chunks, err) => {
                Box::pin(self.counted(chunks).chain(stream::once(async move { Err(err) })))
            }
            MockResponse::StreamThenPending(chunks) => {
                Box::pin(self.counted(chunks).chain(stream::pending()))
            }
            MockResponse::Status(status) => {
                return Ok(StreamResponse::new(status, Box::pin(stream::empty())));
            }
            MockResponse::NoBody(status) => return Ok(StreamResponse::empty(status)),
            MockResponse::Error(err) => return Err(err),
        };

        Ok(StreamResponse::new(200, stream))
    }
}
