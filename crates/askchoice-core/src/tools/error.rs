//! Tool-layer errors

use crate::choice::ChoiceError;
use crate::error::{AskError, UnifiedError};

/// Why a tool call did not produce a result
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The arguments did not describe a valid request; nothing was presented
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// No answer arrived within the configured wait
    #[error("Timed out waiting for the operator")]
    Timeout,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The caller or the operator abandoned the call
    #[error("Tool execution cancelled")]
    Cancelled,
}

impl UnifiedError for ToolError {
    fn error_code(&self) -> &str {
        match self {
            Self::InvalidArguments(_) => "TOOL_INVALID_ARGS",
            Self::ExecutionFailed(_) => "TOOL_EXEC_FAILED",
            Self::Timeout => "TOOL_TIMEOUT",
            Self::Json(_) => "TOOL_JSON_ERROR",
            Self::Cancelled => "TOOL_CANCELLED",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::InvalidArguments(detail) | Self::ExecutionFailed(detail) => detail,
            Self::Timeout => "Timed out waiting for the operator",
            Self::Json(_) => "Malformed JSON",
            Self::Cancelled => "Tool execution cancelled",
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<ChoiceError> for ToolError {
    fn from(err: ChoiceError) -> Self {
        Self::InvalidArguments(err.to_string())
    }
}

impl From<AskError> for ToolError {
    fn from(err: AskError) -> Self {
        match err {
            AskError::Structural(err) => err.into(),
            AskError::Cancelled => Self::Cancelled,
            AskError::Timeout { .. } => Self::Timeout,
            other => Self::ExecutionFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_structural_errors_become_invalid_arguments() {
        let err: ToolError = ChoiceError::MissingQuestions.into();
        assert_eq!(
            err.to_string(),
            "Invalid arguments: At least one question is required"
        );
        assert_eq!(err.error_code(), "TOOL_INVALID_ARGS");

        let err: ToolError = AskError::from(ChoiceError::MissingQuestions).into();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_ask_error_mapping() {
        assert!(matches!(ToolError::from(AskError::Cancelled), ToolError::Cancelled));
        assert!(matches!(
            ToolError::from(AskError::timeout(Duration::from_secs(3))),
            ToolError::Timeout
        ));
        assert!(ToolError::Timeout.is_retryable());
        assert!(matches!(
            ToolError::from(AskError::channel("closed")),
            ToolError::ExecutionFailed(_)
        ));
    }
}
