//! steptutor - streaming client for the step tutor
//!
//! Asks a question about one step of a worked solution and decodes the
//! tutor's answer incrementally from the response body.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod sse;
pub mod stream;
pub mod traits;
pub mod tutor;
