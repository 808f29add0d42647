//! askchoice core library
//!
//! This crate provides the building blocks of the multiple-choice question
//! protocol used by agent tools:
//!
//! - [`choice`] - request building/validation, the selection form and the
//!   response reconciler
//! - [`input`] - the async channel between a tool invocation and the UI
//! - [`tools`] - the `Tool` trait and call/result types
//! - [`config`] - configuration loading
//! - [`error`] - error types shared across crates

#![allow(clippy::collapsible_if)]
#![allow(clippy::derivable_impls)]

pub mod choice;
pub mod config;
pub mod error;
pub mod input;
pub mod tools;

pub use choice::{
    AnswerRecord, ChoiceError, ChoiceForm, ChoiceOption, ChoiceRequest, ChoiceRequestBuilder,
    ChoiceResponse, FormState, Question, Reconciled, ResponseParseError,
};
pub use config::{AskConfig, ChoiceSettings, InputSettings, LoggingConfig};
pub use error::{AskError, AskResult, UnifiedError};
pub use input::{ChoicePresenter, InputChannel, InputChannelHandle, InputPresenter};
pub use tools::{Tool, ToolCall, ToolError, ToolResult, ToolSchema};
