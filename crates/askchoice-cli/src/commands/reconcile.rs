//! Reconcile command implementation

use anyhow::{Context, Result};
use askchoice_core::choice::{ChoiceRequestBuilder, parse_response_payload, reconcile};
use askchoice_core::config::AskConfig;
use std::path::Path;

use super::read_input;
use crate::console::CliConsole;

/// Reconcile the payload in `response` against the request in `request`
pub fn execute(request: &Path, response: &Path, config: &AskConfig) -> Result<()> {
    let builder = ChoiceRequestBuilder::from_settings(&config.choice);
    let request = builder
        .build_from_text(&read_input(request)?)
        .with_context(|| format!("Invalid request in '{}'", request.display()))?;

    let parsed = parse_response_payload(&read_input(response)?);
    if let Some(diagnostic) = &parsed.diagnostic {
        CliConsole::new(true).warn(&diagnostic.to_string());
    }

    println!("{}", reconcile(&request.questions, &parsed.response).to_wire());
    Ok(())
}
