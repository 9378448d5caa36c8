//! Read loop for one streaming session.

use std::future::Future;

use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::error::StreamError;
use crate::sse::{Event, SseParser};
use crate::traits::{AnswerSink, ByteStream, HttpError, StreamResponse};

use super::state::{AnswerAccumulator, CompletionReason, SessionOutcome, SessionState};

/// One request/response streaming lifecycle.
///
/// All mutable state (decoder context, pending line, accumulated answer)
/// lives here, so concurrent sessions share nothing. The session is consumed
/// by [`StreamSession::run`].
#[derive(Debug)]
pub struct StreamSession {
    cancel: CancellationToken,
    parser: SseParser,
    answer: AnswerAccumulator,
}

impl StreamSession {
    /// Create a session that stops when `cancel` is triggered.
    pub fn new(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            parser: SseParser::new(),
            answer: AnswerAccumulator::new(),
        }
    }

    /// Drive the session to a terminal state.
    ///
    /// `request` issues the outbound request. Fragments are pushed to `sink`
    /// as they are decoded and `sink.on_finished` is called exactly once.
    /// Cancellation is checked while waiting for the response and before
    /// every chunk read; it never interrupts parsing of a chunk already read.
    pub async fn run<F, S>(mut self, request: F, mut sink: S) -> SessionOutcome
    where
        F: Future<Output = Result<StreamResponse, HttpError>>,
        S: AnswerSink,
    {
        let cancel = self.cancel.clone();
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return self.finish(SessionState::Failed(StreamError::Cancelled), &mut sink);
            }
            response = request => response,
        };

        let body = match open_body(response) {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, code = err.error_code(), "Tutor request rejected");
                return self.finish(SessionState::Failed(err), &mut sink);
            }
        };

        info!("Answer stream opened");
        let terminal = self.read_body(body, &mut sink).await;
        self.finish(terminal, &mut sink)
    }

    /// Pull chunks until the body yields a terminal state.
    ///
    /// The body is dropped on return, so nothing more is read after the
    /// sentinel.
    async fn read_body<S: AnswerSink>(
        &mut self,
        mut body: ByteStream,
        sink: &mut S,
    ) -> SessionState {
        loop {
            let next = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    debug!("Cancellation requested, aborting read");
                    return SessionState::Failed(StreamError::Cancelled);
                }
                next = body.next() => next,
            };

            match next {
                Some(Ok(chunk)) => {
                    debug!(bytes = chunk.len(), "Received chunk");
                    let events = self.parser.feed(&chunk);
                    if let Some(terminal) = self.handle_events(events, sink) {
                        return terminal;
                    }
                }
                Some(Err(e)) => {
                    error!(error = %e, "Answer stream read failed");
                    return SessionState::Failed(StreamError::TransportError {
                        message: e.to_string(),
                    });
                }
                None => {
                    self.parser.finish();
                    debug!("Transport closed without sentinel");
                    return SessionState::Completed(CompletionReason::GracefulEnd);
                }
            }
        }
    }

    fn handle_events<S: AnswerSink>(
        &mut self,
        events: Vec<Event>,
        sink: &mut S,
    ) -> Option<SessionState> {
        for event in events {
            match event {
                Event::Fragment(Some(text)) => {
                    self.answer.push(&text);
                    sink.on_fragment(&text);
                }
                Event::Fragment(None) => {}
                Event::Done => {
                    return Some(SessionState::Completed(CompletionReason::Sentinel));
                }
            }
        }
        None
    }

    fn finish<S: AnswerSink>(self, terminal: SessionState, sink: &mut S) -> SessionOutcome {
        let outcome = SessionOutcome {
            state: terminal,
            fragments: self.answer.fragment_count(),
            malformed_frames: self.parser.malformed_frames(),
            answer: self.answer.into_string(),
        };

        match &outcome.state {
            SessionState::Completed(reason) => info!(
                ?reason,
                fragments = outcome.fragments,
                malformed_frames = outcome.malformed_frames,
                "Answer stream completed"
            ),
            SessionState::Failed(err) => info!(
                code = err.error_code(),
                fragments = outcome.fragments,
                "Answer stream ended with failure"
            ),
            SessionState::Streaming => {}
        }

        sink.on_finished(&outcome);
        outcome
    }
}

/// Validate the response and take its body.
fn open_body(response: Result<StreamResponse, HttpError>) -> Result<ByteStream, StreamError> {
    let response = response.map_err(|e| StreamError::rejected(&e))?;

    if !response.is_success() {
        return Err(StreamError::RequestRejected {
            status: Some(response.status),
            message: format!("Unexpected status {}", response.status),
        });
    }

    if let Some(content_type) = response.headers.get("content-type") {
        if !content_type.starts_with("text/event-stream") {
            debug!(content_type = %content_type, "Answer body is not an event stream");
        }
    }

    response.body.ok_or(StreamError::RequestRejected {
        status: Some(response.status),
        message: "Response carried no body".to_string(),
    })
}
