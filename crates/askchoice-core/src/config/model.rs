//! Configuration model

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use super::logging_config::LoggingConfig;
use crate::error::AskError;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AskConfig {
    /// Request building
    pub choice: ChoiceSettings,
    /// Presenter channel
    pub input: InputSettings,
    /// Logging
    pub logging: LoggingConfig,
}

/// Request building settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceSettings {
    /// Reject duplicate question ids and duplicate option ids within a question
    pub enforce_unique_ids: bool,
}

/// Presenter channel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Pending requests the channel can queue
    pub buffer_size: usize,
    /// Seconds to wait for the operator; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
    /// Answer automatically instead of asking (batch/CI use)
    pub auto_response: Option<AutoResponseMode>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            buffer_size: 16,
            timeout_secs: None,
            auto_response: None,
        }
    }
}

impl InputSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Non-interactive answering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoResponseMode {
    /// Submit with nothing selected
    Default,
    /// Pick the first option of every question
    FirstOption,
    /// Skip every request
    AlwaysSkip,
    /// Cancel every request
    AlwaysCancel,
}

impl FromStr for AutoResponseMode {
    type Err = AskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" | "empty" => Ok(Self::Default),
            "first_option" | "first" => Ok(Self::FirstOption),
            "always_skip" | "skip" => Ok(Self::AlwaysSkip),
            "always_cancel" | "cancel" => Ok(Self::AlwaysCancel),
            other => Err(AskError::config(format!(
                "Unknown auto-response mode '{}'",
                other
            ))),
        }
    }
}
