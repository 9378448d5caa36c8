//! UI-facing sink for a streamed answer.

use crate::stream::SessionOutcome;

/// Receives an answer as it is decoded.
///
/// `on_fragment` is called once per fragment, in arrival order, and
/// `on_finished` exactly once when the session reaches a terminal state.
pub trait AnswerSink: Send {
    /// Append one decoded fragment to the visible answer.
    fn on_fragment(&mut self, fragment: &str);

    /// The session ended. The outcome carries the full accumulated text.
    fn on_finished(&mut self, outcome: &SessionOutcome);
}

impl<S: AnswerSink + ?Sized> AnswerSink for &mut S {
    fn on_fragment(&mut self, fragment: &str) {
        (**self).on_fragment(fragment)
    }

    fn on_finished(&mut self, outcome: &SessionOutcome) {
        (**self).on_finished(outcome)
    }
}

impl<S: AnswerSink + ?Sized> AnswerSink for Box<S> {
    fn on_fragment(&mut self, fragment: &str) {
        (**self).on_fragment(fragment)
    }

    fn on_finished(&mut self, outcome: &SessionOutcome) {
        (**self).on_finished(outcome)
    }
}
