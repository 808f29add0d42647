//! The agent-callable tool contract

use super::error::ToolError;
use super::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::Instant;

/// A capability a model can invoke by name
///
/// `schema()` is what gets advertised to the model; `execute()` runs one call.
/// Hosts usually go through [`Tool::execute_with_timing`], which never fails
/// and folds errors into the returned [`ToolResult`].
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model uses to call the tool
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Parameter schema advertised to the model
    fn schema(&self) -> ToolSchema;

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Cheap argument checks run before `execute`
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Text shown to a human for a finished call
    fn render_result(&self, result: &ToolResult) -> String {
        match (&result.output, &result.error) {
            (Some(output), _) if result.success => output.clone(),
            (_, Some(error)) => format!("Error: {}", error),
            _ => String::new(),
        }
    }

    /// Whether a call blocks until an operator answers
    fn requires_user_interaction(&self) -> bool {
        false
    }

    /// Validate and execute, recording the elapsed time
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        let started = Instant::now();
        let outcome = match self.validate(call) {
            Ok(()) => self.execute(call).await,
            Err(err) => Err(err),
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => result.with_execution_time(elapsed_ms),
            Err(err) => {
                ToolResult::error(&call.id, self.name(), err.to_string()).with_execution_time(elapsed_ms)
            }
        }
    }
}
