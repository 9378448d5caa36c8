//! Frame and event types for the tutor answer stream.
//!
//! A response body is a sequence of lines. Each complete line is classified
//! into a [`Frame`]; `data:` frames carry a payload that parses into an
//! [`Event`].

use thiserror::Error;

/// Literal payload that terminates the stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Prefix that marks a data frame. The trailing space is part of the prefix.
pub const DATA_PREFIX: &str = "data: ";

/// A classified line of the wire stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Keep-alive or other comment line (starts with `:`)
    Comment,
    /// Empty or whitespace-only line
    Blank,
    /// `data: <payload>` line, payload trimmed
    Data(String),
    /// Anything else (`event:`, `id:`, stray text)
    Unrecognized,
}

impl Frame {
    /// Name of the frame class, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Frame::Comment => "comment",
            Frame::Blank => "blank",
            Frame::Data(_) => "data",
            Frame::Unrecognized => "unrecognized",
        }
    }
}

/// Event parsed from the payload of a data frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Incremental answer text. `None` when the payload had no content field
    /// or the content was empty.
    Fragment(Option<String>),
    /// The `[DONE]` sentinel
    Done,
}

impl Event {
    /// Returns true for events that end the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Done)
    }
}

/// Errors that can occur while parsing a single frame.
///
/// These never reach the caller of a session: the frame is skipped and the
/// stream continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SseParseError {
    /// Payload of a data frame was not valid JSON
    #[error("Invalid JSON in data frame: {message}")]
    InvalidJson { payload: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_kind() {
        assert_eq!(Frame::Comment.kind(), "comment");
        assert_eq!(Frame::Blank.kind(), "blank");
        assert_eq!(Frame::Data("x".to_string()).kind(), "data");
        assert_eq!(Frame::Unrecognized.kind(), "unrecognized");
    }

    #[test]
    fn test_event_is_terminal() {
        assert!(Event::Done.is_terminal());
        assert!(!Event::Fragment(Some("hi".to_string())).is_terminal());
        assert!(!Event::Fragment(None).is_terminal());
    }

    #[test]
    fn test_sse_parse_error_display() {
        let err = SseParseError::InvalidJson {
            payload: "{not".to_string(),
            message: "key must be a string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid JSON in data frame: key must be a string"
        );
    }
}
