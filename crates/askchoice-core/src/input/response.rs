//! Input response sent back by the UI

use uuid::Uuid;

use crate::choice::{ChoiceResponse, SKIP_SENTINEL};

/// Response kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResponseKind {
    /// A response payload: skip sentinel or JSON selections, possibly malformed
    Payload { payload: String },
    /// The UI dismissed the request without answering or skipping
    Cancelled,
}

/// User's response to an input request
#[derive(Debug, Clone)]
pub struct InputResponse {
    /// ID matching the request
    pub request_id: Uuid,
    /// The response kind
    pub kind: InputResponseKind,
}

impl InputResponse {
    pub fn new(request_id: Uuid, kind: InputResponseKind) -> Self {
        Self { request_id, kind }
    }

    /// Create a response carrying a raw payload
    pub fn payload(request_id: Uuid, payload: impl Into<String>) -> Self {
        Self::new(
            request_id,
            InputResponseKind::Payload {
                payload: payload.into(),
            },
        )
    }

    /// Create a response from a finished form
    pub fn from_choice(request_id: Uuid, response: &ChoiceResponse) -> Self {
        Self::payload(request_id, response.to_payload())
    }

    /// Create a skip response
    pub fn skipped(request_id: Uuid) -> Self {
        Self::payload(request_id, SKIP_SENTINEL)
    }

    /// Create a cancelled response
    pub fn cancelled(request_id: Uuid) -> Self {
        Self::new(request_id, InputResponseKind::Cancelled)
    }

    /// Check if cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, InputResponseKind::Cancelled)
    }

    /// Get the payload, if any
    pub fn get_payload(&self) -> Option<&str> {
        match &self.kind {
            InputResponseKind::Payload { payload } => Some(payload),
            InputResponseKind::Cancelled => None,
        }
    }
}
