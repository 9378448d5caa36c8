//! Tutor API client.
//!
//! Sends a step question to the backend and streams the answer through a
//! [`StreamSession`].

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::adapters::ReqwestHttpClient;
use crate::config::TutorConfig;
use crate::error::RequestError;
use crate::models::StepQuestionRequest;
use crate::stream::{SessionOutcome, StreamSession};
use crate::traits::{AnswerSink, Headers, HttpClient, HttpError};

/// Path of the step-question function, relative to the base URL
pub const ASK_STEP_QUESTION_PATH: &str = "/functions/v1/ask-step-question";

/// Client for asking the tutor about a step.
///
/// Cheap to clone; each call to [`TutorClient::ask`] runs an independent
/// session.
#[derive(Debug, Clone)]
pub struct TutorClient<C = ReqwestHttpClient> {
    config: TutorConfig,
    http: Arc<C>,
}

impl TutorClient<ReqwestHttpClient> {
    /// Create a client backed by reqwest.
    pub fn from_config(config: TutorConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::from_config(&config)?;
        Ok(Self::with_http_client(config, http))
    }
}

impl<C: HttpClient> TutorClient<C> {
    /// Create a client over any transport.
    pub fn with_http_client(config: TutorConfig, http: C) -> Self {
        Self {
            config,
            http: Arc::new(http),
        }
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    /// Full URL of the step-question endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url, ASK_STEP_QUESTION_PATH)
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "text/event-stream".to_string());
        if let Some(key) = &self.config.api_key {
            headers.insert("Authorization".to_string(), format!("Bearer {}", key));
        }
        headers
    }

    /// Ask a question and stream the answer into `sink`.
    ///
    /// Returns `Err` only when the request is invalid and nothing was sent.
    /// Every other failure, including a rejected request, is reported as the
    /// terminal state of the returned outcome (and to `sink.on_finished`).
    pub async fn ask<S: AnswerSink>(
        &self,
        request: &StepQuestionRequest,
        sink: S,
        cancel: CancellationToken,
    ) -> Result<SessionOutcome, RequestError> {
        request.validate()?;
        let body = request.to_body()?;
        let url = self.endpoint();
        let headers = self.headers();

        info!(url = %url, topic = %request.topic, "Asking tutor");

        let outcome = StreamSession::new(cancel)
            .run(self.http.post_stream(&url, &body, &headers), sink)
            .await;
        Ok(outcome)
    }
}
