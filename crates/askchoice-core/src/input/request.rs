//! Input request sent from a tool invocation to the UI

use std::time::Duration;
use uuid::Uuid;

use crate::choice::ChoiceRequest;
use crate::error::AskResult;

/// A choice request awaiting an operator
#[derive(Debug, Clone)]
pub struct InputRequest {
    /// Unique ID for this request
    pub id: Uuid,
    /// The questions to show
    pub request: ChoiceRequest,
    /// Optional timeout (None = wait indefinitely)
    pub timeout: Option<Duration>,
}

impl InputRequest {
    pub fn new(request: ChoiceRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
            timeout: None,
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The request serialized for a front-end
    pub fn payload(&self) -> AskResult<String> {
        Ok(serde_json::to_string(&self.request)?)
    }
}
