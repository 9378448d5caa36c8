//! Wire models for outbound requests.

mod request;

pub use request::StepQuestionRequest;
