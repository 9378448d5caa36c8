//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - Transport with scripted response bodies

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
