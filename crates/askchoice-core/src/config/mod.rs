//! Configuration management for askchoice
//!
//! Configuration is resolved in layers: defaults, then a config file
//! (TOML, YAML or JSON), then `ASKCHOICE_*` environment variables.

pub mod env_loader;
pub mod file_loader;
pub mod logging_config;
pub mod model;

pub use env_loader::apply_env_overrides;
pub use file_loader::load_from_file;
pub use logging_config::LoggingConfig;
pub use model::{AskConfig, AutoResponseMode, ChoiceSettings, InputSettings};

use crate::error::AskResult;
use std::path::Path;

/// Load configuration from an optional file and apply environment overrides
pub fn load_config(path: Option<&Path>) -> AskResult<AskConfig> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => AskConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}
