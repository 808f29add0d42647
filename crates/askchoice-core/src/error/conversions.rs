//! From trait implementations for AskError conversions

use super::types::AskError;

impl From<anyhow::Error> for AskError {
    fn from(error: anyhow::Error) -> Self {
        Self::other(error.to_string())
    }
}

impl From<std::io::Error> for AskError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AskError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<toml::de::Error> for AskError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("Failed to parse TOML: {}", error))
    }
}

impl From<serde_yaml::Error> for AskError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::config(format!("Failed to parse YAML: {}", error))
    }
}
