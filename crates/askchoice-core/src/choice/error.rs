//! Structural and response errors for the choice protocol

use thiserror::Error;

/// Structural failure while building a [`ChoiceRequest`](super::ChoiceRequest)
///
/// Raised before anything is shown to the operator. Positions are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("At least one question is required")]
    MissingQuestions,

    #[error("Question {position} is missing an id")]
    MissingQuestionId { position: usize },

    #[error("Question '{question_id}' is missing a prompt")]
    MissingPrompt { question_id: String },

    #[error("Question '{question_id}' must have at least 2 options (found {found})")]
    InsufficientOptions { question_id: String, found: usize },

    #[error("Question '{question_id}' option {position} is missing an id")]
    MissingOptionId { question_id: String, position: usize },

    #[error("Question '{question_id}' option '{option_id}' is missing a label")]
    MissingOptionLabel {
        question_id: String,
        option_id: String,
    },

    #[error("Duplicate question id '{question_id}'")]
    DuplicateQuestionId { question_id: String },

    #[error("Question '{question_id}' has duplicate option id '{option_id}'")]
    DuplicateOptionId {
        question_id: String,
        option_id: String,
    },

    #[error("Malformed choice parameters: {0}")]
    Malformed(String),
}

impl ChoiceError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingQuestions => "CHOICE_MISSING_QUESTIONS",
            Self::MissingQuestionId { .. } => "CHOICE_MISSING_QUESTION_ID",
            Self::MissingPrompt { .. } => "CHOICE_MISSING_PROMPT",
            Self::InsufficientOptions { .. } => "CHOICE_INSUFFICIENT_OPTIONS",
            Self::MissingOptionId { .. } => "CHOICE_MISSING_OPTION_ID",
            Self::MissingOptionLabel { .. } => "CHOICE_MISSING_OPTION_LABEL",
            Self::DuplicateQuestionId { .. } => "CHOICE_DUPLICATE_QUESTION_ID",
            Self::DuplicateOptionId { .. } => "CHOICE_DUPLICATE_OPTION_ID",
            Self::Malformed(_) => "CHOICE_MALFORMED",
        }
    }
}

/// A response payload that could not be parsed
///
/// Never fatal: the payload is replaced by an empty response and this is
/// surfaced to the operator as a diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not parse response ({reason}); treating it as no selection")]
pub struct ResponseParseError {
    /// Parser message
    pub reason: String,
    /// Leading part of the offending payload
    pub excerpt: String,
}

impl ResponseParseError {
    const EXCERPT_CHARS: usize = 80;

    pub fn new(reason: impl Into<String>, payload: &str) -> Self {
        Self {
            reason: reason.into(),
            excerpt: payload.chars().take(Self::EXCERPT_CHARS).collect(),
        }
    }
}
