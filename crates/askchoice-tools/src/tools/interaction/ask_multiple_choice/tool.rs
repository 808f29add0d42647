//! AskMultipleChoice tool implementation

use std::sync::Arc;

use askchoice_core::choice::{
    ChoiceRequest, ChoiceRequestBuilder, parse_response_payload, reconcile,
};
use askchoice_core::config::ChoiceSettings;
use askchoice_core::input::ChoicePresenter;
use askchoice_core::tools::{Tool, ToolCall, ToolError, ToolResult, ToolSchema};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use super::args::resolve_arguments;
use super::schema::create_schema;

pub const TOOL_NAME: &str = "ask_multiple_choice";

/// Tool for asking the user multiple-choice questions
///
/// The request is validated before anything is shown. The invocation then
/// waits on the presenter until the operator confirms, skips, or the
/// cancellation token fires. Confirmed selections are mapped back to option
/// labels; a skip returns a fixed acknowledgement.
pub struct AskMultipleChoiceTool {
    presenter: Arc<dyn ChoicePresenter>,
    builder: ChoiceRequestBuilder,
    cancel_token: Option<CancellationToken>,
}

impl AskMultipleChoiceTool {
    pub fn new(presenter: Arc<dyn ChoicePresenter>) -> Self {
        Self {
            presenter,
            builder: ChoiceRequestBuilder::new(),
            cancel_token: None,
        }
    }

    /// Apply request building settings
    pub fn with_settings(mut self, settings: &ChoiceSettings) -> Self {
        self.builder = ChoiceRequestBuilder::from_settings(settings);
        self
    }

    /// Abort a pending presentation when `token` is cancelled
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    /// Normalize and validate the call's arguments
    pub fn build_request(&self, call: &ToolCall) -> Result<ChoiceRequest, ToolError> {
        let value = resolve_arguments(call)?;
        Ok(self.builder.build_from_value(&value)?)
    }

    async fn await_payload(&self, request: &ChoiceRequest) -> Result<String, ToolError> {
        let presented = async {
            self.presenter
                .present(request)
                .await
                .map_err(ToolError::from)
        };

        match &self.cancel_token {
            Some(token) => tokio::select! {
                _ = token.cancelled() => {
                    debug!("choice request cancelled while waiting for the operator");
                    Err(ToolError::Cancelled)
                }
                payload = presented => payload,
            },
            None => presented.await,
        }
    }
}

#[async_trait]
impl Tool for AskMultipleChoiceTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Ask the user one or more multiple-choice questions and wait for their answers. \
        Each question needs an id, a prompt and at least 2 options with an id and a label; \
        set allow_multiple to let the user pick several options. The result lists the chosen \
        option labels per question, or reports that the user declined to answer."
    }

    fn schema(&self) -> ToolSchema {
        create_schema(self.name(), self.description())
    }

    #[instrument(skip(self, tool_call), fields(call_id = %tool_call.id))]
    async fn execute(&self, tool_call: &ToolCall) -> Result<ToolResult, ToolError> {
        let request = self.build_request(tool_call)?;
        let total = request.len();

        let payload = self.await_payload(&request).await?;
        let parsed = parse_response_payload(&payload);
        if let Some(diagnostic) = &parsed.diagnostic {
            warn!(%diagnostic, "recovered from malformed response payload");
        }

        let reconciled = reconcile(&request.questions, &parsed.response);
        debug!(
            answered = reconciled.answered_count(),
            total,
            skipped = reconciled.is_skipped(),
            "choice request answered"
        );

        let mut result = ToolResult::success(&tool_call.id, self.name(), reconciled.to_wire())
            .with_metadata("answered", reconciled.answered_count())
            .with_metadata("total", total)
            .with_metadata("skipped", reconciled.is_skipped());
        if let Some(diagnostic) = parsed.diagnostic {
            result = result.with_metadata("diagnostic", diagnostic.to_string());
        }
        Ok(result)
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        if !call.arguments.contains_key("questions") && !call.arguments.contains_key("question") {
            return Err(ToolError::InvalidArguments(
                "Missing required parameter: questions".to_string(),
            ));
        }
        Ok(())
    }

    /// The invocation blocks until the operator answers through the presenter.
    fn requires_user_interaction(&self) -> bool {
        true
    }
}
