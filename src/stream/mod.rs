//! Stream controller: drives a session from request to terminal state.
//!
//! Chunks flow through byte decoding, line splitting, frame classification
//! and event parsing; each fragment is appended to the answer and pushed to
//! the [`AnswerSink`](crate::traits::AnswerSink) as it arrives.

mod session;
mod state;

pub use session::StreamSession;
pub use state::{AnswerAccumulator, CompletionReason, SessionOutcome, SessionState};
