use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Request body for asking the tutor about one step of a worked solution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepQuestionRequest {
    /// The step as shown to the student
    pub step_content: String,
    /// Explanation previously given for the step
    pub step_explanation: String,
    /// Free-text question from the student
    pub user_question: String,
    /// Topic label, e.g. "Quadratic equations"
    pub topic: String,
}

impl StepQuestionRequest {
    /// Create a request carrying only the question
    pub fn new(user_question: impl Into<String>) -> Self {
        Self {
            step_content: String::new(),
            step_explanation: String::new(),
            user_question: user_question.into(),
            topic: String::new(),
        }
    }

    /// Builder method to attach the step being asked about
    pub fn with_step(
        mut self,
        step_content: impl Into<String>,
        step_explanation: impl Into<String>,
    ) -> Self {
        self.step_content = step_content.into();
        self.step_explanation = step_explanation.into();
        self
    }

    /// Builder method to set the topic label
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Reject requests that must not be sent.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.user_question.trim().is_empty() {
            return Err(RequestError::EmptyQuestion);
        }
        Ok(())
    }

    /// Serialize to the JSON body sent on the wire
    pub fn to_body(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(self)?)
    }
}
