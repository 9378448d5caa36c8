//! Incremental decoder for the tutor's streamed answer.
//!
//! The response body is line oriented:
//! - `data: <json>` - a chat-completion chunk carrying one text fragment
//! - `data: [DONE]` - end of stream
//! - Lines starting with `:` - comments (ignored)
//! - Blank lines and any other lines - ignored
//!
//! # Module structure
//! - `decoder` - UTF-8 decoding that survives chunk boundaries
//! - `line_buffer` - Splits decoded text into complete lines
//! - `events` - Frame and event types
//! - `parser` - Classification, payload parsing, and the stateful SseParser

mod decoder;
mod events;
mod line_buffer;
mod parser;

// Re-export public types
pub use decoder::Utf8ChunkDecoder;
pub use events::{Event, Frame, SseParseError, DATA_PREFIX, DONE_SENTINEL};
pub use line_buffer::LineBuffer;
pub use parser::{classify_line, parse_event, SseParser};
