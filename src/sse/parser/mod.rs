//! Stream parsing logic
//!
//! Contains the line classifier, the payload parser, and the stateful
//! [`SseParser`] that turns raw body chunks into events.

mod content;

use tracing::{debug, warn};

use crate::sse::decoder::Utf8ChunkDecoder;
use crate::sse::events::{Event, Frame, SseParseError, DATA_PREFIX, DONE_SENTINEL};
use crate::sse::line_buffer::LineBuffer;

use content::{error_field, extract_fragment};

/// Classify a single complete line (already stripped of its terminator)
pub fn classify_line(line: &str) -> Frame {
    if line.trim().is_empty() {
        return Frame::Blank;
    }

    if line.starts_with(':') {
        return Frame::Comment;
    }

    match line.strip_prefix(DATA_PREFIX) {
        Some(payload) => Frame::Data(payload.trim().to_string()),
        None => Frame::Unrecognized,
    }
}

/// Parse the payload of a data frame into an event
pub fn parse_event(payload: &str) -> Result<Event, SseParseError> {
    if payload == DONE_SENTINEL {
        return Ok(Event::Done);
    }

    let json: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| SseParseError::InvalidJson {
            payload: payload.to_string(),
            message: e.to_string(),
        })?;

    if let Some(error) = error_field(&json) {
        warn!(error = %error, "Data frame carries an error field, ignoring it");
    }

    Ok(Event::Fragment(extract_fragment(&json)))
}

/// Stateful parser for one session's response body.
///
/// Owns the byte decoder and line buffer, so every session must create its
/// own parser.
#[derive(Debug, Default)]
pub struct SseParser {
    decoder: Utf8ChunkDecoder,
    lines: LineBuffer,
    /// Set once a terminal event has been emitted
    finished: bool,
    /// Count of data frames skipped because their payload did not parse
    malformed_frames: usize,
}

impl SseParser {
    /// Create a new parser with empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a body chunk, returning the events it completes.
    ///
    /// Empty fragments are dropped. Processing stops at the first terminal
    /// event, which is included as the last element; lines after it (and any
    /// later chunks) are ignored.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Event> {
        if self.finished {
            return Vec::new();
        }

        let text = self.decoder.decode(chunk);
        let lines = self.lines.extract(&text);
        self.process_lines(lines)
    }

    /// Signal end of the body.
    ///
    /// Flushes the decoder, then discards whatever is left in the line buffer:
    /// a final line without a newline is never treated as a frame, so this
    /// returns no events.
    pub fn finish(&mut self) {
        let tail = self.decoder.finish();
        if !tail.is_empty() {
            self.lines.extract(&tail);
        }
        if let Some(discarded) = self.lines.finish() {
            if !self.finished {
                warn!(
                    bytes = discarded.len(),
                    "Discarding unterminated final line at end of stream"
                );
            }
        }
        self.finished = true;
    }

    /// Returns true once a terminal event was seen or the body ended
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of data frames skipped as malformed so far
    pub fn malformed_frames(&self) -> usize {
        self.malformed_frames
    }

    /// Reset the parser state for reuse.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn process_lines(&mut self, lines: Vec<String>) -> Vec<Event> {
        let mut events = Vec::new();

        for line in lines {
            let frame = classify_line(&line);
            let payload = match frame {
                Frame::Data(payload) => payload,
                other => {
                    debug!(kind = other.kind(), "Ignoring non-data frame");
                    continue;
                }
            };

            match parse_event(&payload) {
                Ok(Event::Fragment(None)) => {
                    debug!("Data frame without content");
                }
                Ok(event) => {
                    let terminal = event.is_terminal();
                    events.push(event);
                    if terminal {
                        self.finished = true;
                        break;
                    }
                }
                Err(e) => {
                    self.malformed_frames += 1;
                    warn!(error = %e, payload = %payload, "Skipping malformed data frame");
                }
            }
        }

        events
    }
}
