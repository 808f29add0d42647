//! UnifiedError trait implementation for AskError

use super::types::{AskError, UnifiedError};

impl UnifiedError for AskError {
    fn error_code(&self) -> &str {
        match self {
            Self::Structural(err) => err.error_code(),
            Self::Config { .. } => "ASK_CONFIG",
            Self::Channel { .. } => "ASK_CHANNEL",
            Self::Io { .. } => "ASK_IO",
            Self::Json { .. } => "ASK_JSON",
            Self::Timeout { .. } => "ASK_TIMEOUT",
            Self::Cancelled => "ASK_CANCELLED",
            Self::Other { .. } => "ASK_OTHER",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Structural(_) => "Invalid choice request",
            Self::Config { message, .. } => message,
            Self::Channel { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::Json { message, .. } => message,
            Self::Timeout { .. } => "Input timeout",
            Self::Cancelled => "Task was cancelled",
            Self::Other { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Structural(_) | Self::Cancelled => None,
            Self::Config { context, .. } => context.as_deref(),
            Self::Channel { context, .. } => context.as_deref(),
            Self::Io { context, .. } => context.as_deref(),
            Self::Json { context, .. } => context.as_deref(),
            Self::Timeout { context, .. } => context.as_deref(),
            Self::Other { context, .. } => context.as_deref(),
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Channel { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::choice::ChoiceError;

    #[test]
    fn test_error_codes() {
        assert_eq!(AskError::config("x").error_code(), "ASK_CONFIG");
        assert_eq!(AskError::Cancelled.error_code(), "ASK_CANCELLED");
        assert_eq!(
            AskError::from(ChoiceError::MissingQuestions).error_code(),
            "CHOICE_MISSING_QUESTIONS"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(AskError::timeout(Duration::from_secs(5)).is_retryable());
        assert!(AskError::channel("closed").is_retryable());
        assert!(!AskError::Cancelled.is_retryable());
        assert!(!AskError::from(ChoiceError::MissingQuestions).is_retryable());
    }

    #[test]
    fn test_structural_display_carries_detail() {
        let err = AskError::from(ChoiceError::MissingPrompt {
            question_id: "framework".to_string(),
        });
        assert!(err.to_string().contains("framework"));
    }
}
