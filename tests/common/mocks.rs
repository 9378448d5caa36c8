//! Mock transport fixtures.
//!
//! Re-exports the mock implementations from `steptutor::adapters::mock` and
//! adds sinks used across the integration tests.

pub use steptutor::adapters::mock::{MockHttpClient, MockResponse};
pub use steptutor::adapters::CollectingSink;

use steptutor::stream::SessionOutcome;
use steptutor::traits::AnswerSink;
use tokio_util::sync::CancellationToken;

/// Sink that triggers cancellation after receiving `after` fragments.
pub struct CancellingSink {
    pub inner: CollectingSink,
    token: CancellationToken,
    after: usize,
}

impl CancellingSink {
    pub fn new(token: CancellationToken, after: usize) -> Self {
        Self {
            inner: CollectingSink::new(),
            token,
            after,
        }
    }
}

impl AnswerSink for CancellingSink {
    fn on_fragment(&mut self, fragment: &str) {
        self.inner.on_fragment(fragment);
        if self.inner.fragments.len() >= self.after {
            self.token.cancel();
        }
    }

    fn on_finished(&mut self, outcome: &SessionOutcome) {
        self.inner.on_finished(outcome);
    }
}

/// Mock client answering every request with the given string chunks.
pub fn mock_with_chunks<I, T>(chunks: I) -> MockHttpClient
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    MockHttpClient::with_default(MockResponse::chunks(chunks))
}
