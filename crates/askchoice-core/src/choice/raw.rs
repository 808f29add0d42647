//! Loose input shapes accepted at the builder boundary
//!
//! Tool parameters arrive either as JSON or as XML-style tagged text turned
//! into a tree by [`parse_tagged`](super::parse_tagged). Both tolerate a
//! single item where a sequence is expected, and the tagged form wraps
//! sequences in a container element (`<options><option>..</option></options>`).
//!
//! Only the outer collections are deserialized up front. Each question and
//! option node stays a [`serde_json::Value`] until
//! [`ChoiceRequestBuilder`](super::ChoiceRequestBuilder) reaches it, so a
//! badly typed field is reported against its own position.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ChoiceError;

/// Either a bare item or a sequence of items
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Top-level tool parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChoiceInput {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default, alias = "questions")]
    pub question: Option<OneOrMany<Value>>,
}

impl RawChoiceInput {
    pub fn title(&self) -> Option<String> {
        self.title.as_ref().and_then(scalar_text)
    }

    /// The question nodes in document order
    pub fn question_nodes(&mut self) -> Result<Vec<Value>, ChoiceError> {
        match self.question.take() {
            Some(nodes) => unwrap_collection(nodes, "question").map_err(|()| {
                ChoiceError::Malformed("'question' must be structured, got plain text".into())
            }),
            None => Ok(Vec::new()),
        }
    }
}

/// One question node, fields still untyped
#[derive(Debug, Clone, Default)]
pub struct RawQuestion {
    fields: Map<String, Value>,
}

impl RawQuestion {
    /// Accept `node` as the question at 1-based `position`
    pub fn from_node(position: usize, node: Value) -> Result<Self, ChoiceError> {
        match node {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ChoiceError::Malformed(format!(
                "Question {} must be an element with id, prompt and options, got {}",
                position,
                kind(&other)
            ))),
        }
    }

    pub fn id(&self) -> Option<String> {
        self.fields.get("id").and_then(scalar_text)
    }

    pub fn prompt(&self) -> Option<String> {
        self.fields.get("prompt").and_then(scalar_text)
    }

    /// Only a literal `true` (or the string `"true"`) enables multi-select
    pub fn allow_multiple(&self) -> bool {
        match self
            .fields
            .get("allow_multiple")
            .or_else(|| self.fields.get("allowMultiple"))
        {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) => text.trim() == "true",
            _ => false,
        }
    }

    /// The option nodes of the question identified by `question_id`
    pub fn option_nodes(&mut self, question_id: &str) -> Result<Vec<Value>, ChoiceError> {
        let Some(options) = self.fields.remove("options") else {
            return Ok(Vec::new());
        };
        let nodes = match options {
            Value::Array(items) => OneOrMany::Many(items),
            other => OneOrMany::One(other),
        };
        unwrap_collection(nodes, "option").map_err(|()| {
            ChoiceError::Malformed(format!(
                "Question '{}' options must be structured, got plain text",
                question_id
            ))
        })
    }
}

/// One option node, fields still untyped
#[derive(Debug, Clone, Default)]
pub struct RawOption {
    fields: Map<String, Value>,
}

impl RawOption {
    /// Accept `node` as option `position` of question `question_id`
    pub fn from_node(question_id: &str, position: usize, node: Value) -> Result<Self, ChoiceError> {
        match node {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ChoiceError::Malformed(format!(
                "Question '{}' option {} must be an element with id and label, got {}",
                question_id,
                position,
                kind(&other)
            ))),
        }
    }

    pub fn id(&self) -> Option<String> {
        self.fields.get("id").and_then(scalar_text)
    }

    pub fn label(&self) -> Option<String> {
        self.fields.get("label").and_then(scalar_text)
    }
}

/// A scalar field as trimmed text; numbers are rendered, anything else is absent
pub fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Flatten a collection, unwrapping a `{ "<item>": .. }` container
///
/// Blank text means an empty collection; other plain text is `Err(())`.
fn unwrap_collection(nodes: OneOrMany<Value>, item: &str) -> Result<Vec<Value>, ()> {
    let node = match nodes {
        OneOrMany::Many(items) => return Ok(items),
        OneOrMany::One(node) => node,
    };
    match node {
        Value::Object(mut container) if container.contains_key(item) => {
            match container.remove(item).unwrap_or(Value::Null) {
                Value::Array(items) => Ok(items),
                inner => unwrap_collection(OneOrMany::One(inner), item),
            }
        }
        Value::String(text) if text.trim().is_empty() => Ok(Vec::new()),
        Value::String(_) => Err(()),
        Value::Null => Ok(Vec::new()),
        node => Ok(vec![node]),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an element",
    }
}
