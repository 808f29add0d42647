//! Call, result and schema types exchanged with the model host

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One invocation requested by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    /// Tool name as advertised in its schema
    pub name: String,
    pub arguments: HashMap<String, Value>,
    /// Provider-assigned call id, when it differs from `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
}

impl ToolCall {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: HashMap<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
            call_id: None,
        }
    }

    /// Build a call from a JSON arguments object
    ///
    /// Anything other than an object yields a call without arguments.
    pub fn from_json(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        Self::new(id, name, arguments)
    }

    /// The arguments as one JSON object
    pub fn arguments_value(&self) -> Value {
        Value::Object(
            self.arguments
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// A string-valued argument
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.arguments
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// What a finished call hands back to the model
///
/// `output` is the text the model reads; `metadata` carries structured
/// extras for the host (counters, diagnostics).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub call_id: String,
    pub tool_name: String,
    pub success: bool,
    pub output: Option<String>,
    pub error: Option<String>,
    pub execution_time_ms: Option<u64>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl ToolResult {
    fn finished(call_id: String, tool_name: String, outcome: Result<String, String>) -> Self {
        let success = outcome.is_ok();
        let (output, error) = match outcome {
            Ok(output) => (Some(output), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            call_id,
            tool_name,
            success,
            output,
            error,
            execution_time_ms: None,
            metadata: HashMap::new(),
        }
    }

    pub fn success(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self::finished(call_id.into(), tool_name.into(), Ok(output.into()))
    }

    pub fn error(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self::finished(call_id.into(), tool_name.into(), Err(error.into()))
    }

    pub fn with_execution_time(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = Some(time_ms);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Schema advertised to the model for one tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments object
    pub parameters: Value,
}
