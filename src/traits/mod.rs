//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - Streaming HTTP transport
//! - [`AnswerSink`] - Receiver of decoded fragments and the terminal outcome

pub mod http;
pub mod sink;

pub use http::{ByteStream, Headers, HttpClient, HttpError, StreamResponse};
pub use sink::AnswerSink;
