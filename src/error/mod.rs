//! Error types for steptutor.
//!
//! | Type | Raised by | Surfaced to caller |
//! |------|-----------|--------------------|
//! | [`RequestError`] | request validation | yes, before any I/O |
//! | [`StreamError`] | a failed session | yes, as the terminal state |
//! | [`crate::sse::SseParseError`] | one bad frame | no, frame is skipped |
//! | [`crate::traits::HttpError`] | the transport | folded into `StreamError` |

mod request;
mod stream;

pub use request::RequestError;
pub use stream::StreamError;
