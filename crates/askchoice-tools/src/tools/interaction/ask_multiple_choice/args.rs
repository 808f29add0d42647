//! Argument normalization
//!
//! Models send arguments either as JSON or as XML-style tagged text inside a
//! string. Tagged strings are parsed into the same JSON tree before the
//! builder sees them. When the text is a single element named after its own
//! argument (`"title": "<title>Setup</title>"`) the element is unwrapped.

use askchoice_core::choice::{ChoiceError, parse_tagged};
use askchoice_core::tools::ToolCall;
use serde_json::{Map, Value};

/// Turn tool call arguments into the JSON tree the builder accepts
pub fn resolve_arguments(call: &ToolCall) -> Result<Value, ChoiceError> {
    let mut resolved = Map::new();
    for (key, value) in &call.arguments {
        let value = match value {
            Value::String(text) if looks_tagged(text) => unwrap_self_named(key, parse_tagged(text)?),
            other => other.clone(),
        };
        resolved.insert(key.clone(), value);
    }
    Ok(Value::Object(resolved))
}

fn looks_tagged(text: &str) -> bool {
    text.trim_start().starts_with('<')
}

fn unwrap_self_named(key: &str, parsed: Value) -> Value {
    match parsed {
        Value::Object(mut map) if map.len() == 1 && map.contains_key(key) => {
            map.remove(key).unwrap_or_default()
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_arguments_pass_through() {
        let call = ToolCall::from_json(
            "c1",
            "ask_multiple_choice",
            json!({"title": "T", "questions": [{"id": "q"}]}),
        );
        let value = resolve_arguments(&call).unwrap();
        assert_eq!(value, json!({"title": "T", "questions": [{"id": "q"}]}));
    }

    #[test]
    fn test_tagged_question_text_is_parsed() {
        let call = ToolCall::from_json(
            "c1",
            "ask_multiple_choice",
            json!({"question": "<question><id>q</id><prompt>P</prompt></question>"}),
        );
        let value = resolve_arguments(&call).unwrap();
        assert_eq!(value, json!({"question": {"id": "q", "prompt": "P"}}));
    }

    #[test]
    fn test_tagged_text_under_other_keys() {
        let call = ToolCall::from_json(
            "c1",
            "ask_multiple_choice",
            json!({
                "title": "<title>Setup</title>",
                "questions": "<question><id>a</id></question><question><id>b</id></question>"
            }),
        );
        let value = resolve_arguments(&call).unwrap();
        assert_eq!(
            value,
            json!({"title": "Setup", "questions": {"question": [{"id": "a"}, {"id": "b"}]}})
        );
    }

    #[test]
    fn test_plain_text_is_left_for_the_builder() {
        let call = ToolCall::from_json("c1", "ask_multiple_choice", json!({"question": "why?"}));
        assert_eq!(resolve_arguments(&call).unwrap(), json!({"question": "why?"}));
    }

    #[test]
    fn test_broken_tags_are_malformed() {
        let call = ToolCall::from_json(
            "c1",
            "ask_multiple_choice",
            json!({"question": "<question><id>q</id>"}),
        );
        assert!(matches!(
            resolve_arguments(&call),
            Err(ChoiceError::Malformed(_))
        ));
    }
}
