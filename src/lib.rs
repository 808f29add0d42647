//! askchoice: multiple-choice questions for LLM agents
//!
//! A model calls the `ask_multiple_choice` tool with a title and a list of
//! questions. The request is validated, shown to an operator through a
//! [`ChoicePresenter`], and the operator's selections come back as an
//! `<answers>` block naming the chosen option labels.
//!
//! ```no_run
//! use std::sync::Arc;
//! use askchoice::{AskMultipleChoiceTool, AutoResponse, InputChannel, InputPresenter, Tool, ToolCall};
//!
//! # async fn demo() -> Result<(), askchoice::ToolError> {
//! let presenter = InputPresenter::new(InputChannel::non_interactive(AutoResponse::FirstOption));
//! let tool = AskMultipleChoiceTool::new(Arc::new(presenter));
//! let call = ToolCall::from_json("call-1", "ask_multiple_choice", serde_json::json!({
//!     "questions": [{
//!         "id": "framework",
//!         "prompt": "Which framework?",
//!         "options": [{"id": "react", "label": "React"}, {"id": "vue", "label": "Vue.js"}]
//!     }]
//! }));
//! let result = tool.execute(&call).await?;
//! println!("{}", result.output.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub use askchoice_core::choice::{
    AnswerRecord, ChoiceError, ChoiceForm, ChoiceOption, ChoiceRequest, ChoiceRequestBuilder,
    ChoiceResponse, FormState, NO_SELECTION, QuestionState, Question, Reconciled,
    ResponseParseError, SKIP_SENTINEL, SKIPPED_ACKNOWLEDGEMENT, ToggleOutcome, parse_parameters,
    parse_response_payload, parse_tagged, reconcile,
};
pub use askchoice_core::config::{AskConfig, load_config};
pub use askchoice_core::error::{AskError, AskResult};
pub use askchoice_core::input::{
    AutoResponse, ChoicePresenter, InputChannel, InputChannelHandle, InputPresenter,
    InputResponse,
};
pub use askchoice_core::tools::{Tool, ToolCall, ToolError, ToolResult, ToolSchema};
pub use askchoice_tools::{AskMultipleChoiceTool, get_default_tools};
