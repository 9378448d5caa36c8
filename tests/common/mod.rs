//! Common test utilities for integration tests.
//!
//! Wire-format builders and helpers for running a session over a mock
//! transport.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use steptutor::config::TutorConfig;
use steptutor::models::StepQuestionRequest;
use steptutor::stream::SessionOutcome;
use steptutor::tutor::TutorClient;
use tokio_util::sync::CancellationToken;

/// A `data:` line carrying one content fragment, newline terminated.
pub fn content_frame(text: &str) -> String {
    format!(
        "data: {}\n",
        serde_json::json!({"choices": [{"delta": {"content": text}}]})
    )
}

/// The terminating sentinel line.
pub fn done_frame() -> String {
    "data: [DONE]\n".to_string()
}

/// A complete well-formed body for the given fragments.
pub fn body_for(fragments: &[&str]) -> String {
    let mut body: String = fragments.iter().map(|f| content_frame(f)).collect();
    body.push_str(&done_frame());
    body
}

/// Split `bytes` at the given sorted byte offsets.
pub fn split_at_offsets(bytes: &[u8], offsets: &[usize]) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for &offset in offsets {
        chunks.push(bytes[start..offset].to_vec());
        start = offset;
    }
    chunks.push(bytes[start..].to_vec());
    chunks
}

/// A question that passes validation.
pub fn test_request() -> StepQuestionRequest {
    StepQuestionRequest::new("Why do we divide both sides by 2?")
        .with_step("2x = 4 → x = 2", "Divide both sides by 2")
        .with_topic("Linear equations")
}

/// Client over `mock` with a fixed test base URL.
pub fn test_client(mock: MockHttpClient) -> TutorClient<MockHttpClient> {
    TutorClient::with_http_client(TutorConfig::new("https://tutor.test"), mock)
}

/// Run one session over `mock`, collecting fragments.
pub async fn run_with(mock: MockHttpClient) -> (SessionOutcome, CollectingSink) {
    let client = test_client(mock);
    let mut sink = CollectingSink::new();
    let outcome = client
        .ask(&test_request(), &mut sink, CancellationToken::new())
        .await
        .expect("request should be valid");
    (outcome, sink)
}
