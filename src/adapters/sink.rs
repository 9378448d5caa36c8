//! Answer sink adapters.

use std::io::Write;

use crate::stream::SessionOutcome;
use crate::traits::AnswerSink;

/// Keeps every fragment and the final outcome in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub fragments: Vec<String>,
    pub outcome: Option<SessionOutcome>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenation of the fragments seen so far
    pub fn text(&self) -> String {
        self.fragments.concat()
    }
}

impl AnswerSink for CollectingSink {
    fn on_fragment(&mut self, fragment: &str) {
        self.fragments.push(fragment.to_string());
    }

    fn on_finished(&mut self, outcome: &SessionOutcome) {
        self.outcome = Some(outcome.clone());
    }
}

/// Renders fragments live to a writer, flushing after each one.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, text: &str) {
        let result = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write answer fragment");
        }
    }
}

impl<W: Write + Send> AnswerSink for WriterSink<W> {
    fn on_fragment(&mut self, fragment: &str) {
        self.write(fragment);
    }

    fn on_finished(&mut self, outcome: &SessionOutcome) {
        if !outcome.answer.is_empty() && !outcome.answer.ends_with('\n') {
            self.write("\n");
        }
    }
}
