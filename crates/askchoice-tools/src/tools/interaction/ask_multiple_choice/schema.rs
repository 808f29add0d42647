//! Schema definition for the ask_multiple_choice tool

use askchoice_core::tools::ToolSchema;
use serde_json::json;

/// Creates the JSON schema for the ask_multiple_choice tool
pub fn create_schema(name: &str, description: &str) -> ToolSchema {
    ToolSchema {
        name: name.to_string(),
        description: description.to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Optional short heading shown above the questions"
                },
                "questions": {
                    "type": "array",
                    "description": "Questions to ask, in display order",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "string",
                                "description": "Identifier echoed back in the answers"
                            },
                            "prompt": {
                                "type": "string",
                                "description": "The question text shown to the user"
                            },
                            "options": {
                                "type": "array",
                                "description": "At least 2 options to choose from",
                                "minItems": 2,
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "id": {
                                            "type": "string",
                                            "description": "Identifier of this option"
                                        },
                                        "label": {
                                            "type": "string",
                                            "description": "Display text for this option"
                                        }
                                    },
                                    "required": ["id", "label"]
                                }
                            },
                            "allow_multiple": {
                                "type": "boolean",
                                "description": "Whether several options can be selected. Defaults to false.",
                                "default": false
                            }
                        },
                        "required": ["id", "prompt", "options"]
                    }
                }
            },
            "required": ["questions"]
        }),
    }
}
