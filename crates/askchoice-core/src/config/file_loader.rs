//! Loading configuration files

use crate::config::model::AskConfig;
use crate::error::{AskError, AskResult};
use std::fs;
use std::path::Path;

/// Read an [`AskConfig`] from `path`
///
/// The format follows the extension: `.toml`, `.yaml`/`.yml`, anything else
/// is read as JSON. A missing file yields the defaults.
pub fn load_from_file(path: &Path) -> AskResult<AskConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(AskConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        AskError::config_with_context(
            format!("Cannot read config file: {}", e),
            path.display().to_string(),
        )
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_as(path, "TOML", toml::from_str(&content)),
        Some("yaml") | Some("yml") => parse_as(path, "YAML", serde_yaml::from_str(&content)),
        _ => parse_as(path, "JSON", serde_json::from_str(&content)),
    }
}

fn parse_as<E: std::fmt::Display>(
    path: &Path,
    format: &str,
    parsed: Result<AskConfig, E>,
) -> AskResult<AskConfig> {
    let config = parsed.map_err(|e| {
        AskError::config_with_context(
            format!("Invalid {} config: {}", format, e),
            path.display().to_string(),
        )
    })?;
    tracing::debug!(path = %path.display(), format, "loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::AutoResponseMode;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("askchoice.json");
        fs::write(
            &path,
            r#"{"choice": {"enforce_unique_ids": true}, "logging": {"level": "debug"}}"#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert!(config.choice.enforce_unique_ids);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_load_from_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("askchoice.yaml");
        fs::write(&path, "input:\n  auto_response: always_skip\n").unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.input.auto_response, Some(AutoResponseMode::AlwaysSkip));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = load_from_file(Path::new("/nonexistent/askchoice.toml")).unwrap();
        assert_eq!(config, AskConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("askchoice.toml");
        fs::write(&path, "[choice\nenforce_unique_ids = ").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }
}
