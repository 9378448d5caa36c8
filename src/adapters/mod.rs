//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//! - [`CollectingSink`] - In-memory answer sink
//! - [`WriterSink`] - Live rendering to any `io::Write`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides [`mock::MockHttpClient`], a transport with
//! scripted response bodies.

pub mod mock;
pub mod reqwest_http;
pub mod sink;

pub use mock::{MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
pub use sink::{CollectingSink, WriterSink};
