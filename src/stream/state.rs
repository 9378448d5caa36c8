//! Session state machine and answer accumulation.

use crate::error::StreamError;

/// Why a session completed successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    /// `data: [DONE]` was received
    Sentinel,
    /// The transport closed the body without a sentinel
    GracefulEnd,
}

/// Lifecycle of one streaming session.
///
/// `Streaming` is the only non-terminal state; once `Completed` or `Failed`
/// is reached the state never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Streaming,
    Completed(CompletionReason),
    Failed(StreamError),
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Streaming)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SessionState::Completed(_))
    }

    /// The failure cause, if the session failed
    pub fn error(&self) -> Option<&StreamError> {
        match self {
            SessionState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Ordered concatenation of every fragment received in a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerAccumulator {
    text: String,
    fragments: usize,
}

impl AnswerAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Empty fragments are not counted.
    pub fn push(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        self.text.push_str(fragment);
        self.fragments += 1;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of fragments appended so far
    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Final result of a session, handed to the sink and returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Terminal state
    pub state: SessionState,
    /// Everything accumulated before the terminal state was reached.
    /// Kept on failure so partial answers remain visible.
    pub answer: String,
    /// Number of fragments that made up `answer`
    pub fragments: usize,
    /// Number of data frames skipped as malformed
    pub malformed_frames: usize,
}

impl SessionOutcome {
    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    pub fn error(&self) -> Option<&StreamError> {
        self.state.error()
    }
}
