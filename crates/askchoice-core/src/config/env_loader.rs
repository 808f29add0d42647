//! Environment variable overrides

use crate::config::model::AskConfig;
use crate::error::{AskError, AskResult};
use std::env;

/// Apply `ASKCHOICE_*` environment variables on top of `config`
///
/// - `ASKCHOICE_ENFORCE_UNIQUE_IDS` (`true`/`false`)
/// - `ASKCHOICE_INPUT_TIMEOUT_SECS` (seconds, `0` waits indefinitely)
/// - `ASKCHOICE_AUTO_RESPONSE` (see [`AutoResponseMode`](super::AutoResponseMode))
/// - `ASKCHOICE_LOG_LEVEL`
pub fn apply_env_overrides(config: &mut AskConfig) -> AskResult<()> {
    if let Ok(value) = env::var("ASKCHOICE_ENFORCE_UNIQUE_IDS") {
        config.choice.enforce_unique_ids = value
            .trim()
            .parse()
            .map_err(|_| AskError::config("Invalid ASKCHOICE_ENFORCE_UNIQUE_IDS value"))?;
    }

    if let Ok(value) = env::var("ASKCHOICE_INPUT_TIMEOUT_SECS") {
        let secs: u64 = value
            .trim()
            .parse()
            .map_err(|_| AskError::config("Invalid ASKCHOICE_INPUT_TIMEOUT_SECS value"))?;
        config.input.timeout_secs = (secs > 0).then_some(secs);
    }

    if let Ok(value) = env::var("ASKCHOICE_AUTO_RESPONSE") {
        config.input.auto_response = Some(value.parse()?);
    }

    if let Ok(level) = env::var("ASKCHOICE_LOG_LEVEL") {
        config.logging.level = level;
    }

    Ok(())
}
