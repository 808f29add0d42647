//! Validate command implementation

use anyhow::{Context, Result};
use askchoice_core::choice::{ChoiceRequest, ChoiceRequestBuilder};
use askchoice_core::config::AskConfig;
use colored::*;
use std::path::Path;

use super::read_input;
use crate::console::CliConsole;

/// Build the request in `file` and print it
pub fn execute(file: &Path, json: bool, config: &AskConfig) -> Result<()> {
    let text = read_input(file)?;
    let builder = ChoiceRequestBuilder::from_settings(&config.choice);
    let request = builder
        .build_from_text(&text)
        .with_context(|| format!("Invalid request in '{}'", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
    } else {
        print_summary(&request);
        CliConsole::new(true).success(&format!(
            "{} question(s) are valid",
            request.questions.len()
        ));
    }
    Ok(())
}

fn print_summary(request: &ChoiceRequest) {
    let console = CliConsole::new(true);
    console.print_header(request.title.as_deref().unwrap_or("Choice request"));

    for (idx, question) in request.questions.iter().enumerate() {
        let mode = if question.allow_multiple {
            "multiple".cyan()
        } else {
            "single".dimmed()
        };
        println!(
            "\n{}. {} [{}] ({})",
            idx + 1,
            question.prompt.bold(),
            question.id,
            mode
        );
        for option in &question.options {
            println!("   - {}: {}", option.id.dimmed(), option.label);
        }
    }
    println!();
}
