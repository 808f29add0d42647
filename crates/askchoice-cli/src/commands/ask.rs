//! Ask command implementation

use anyhow::{Context, Result, bail};
use askchoice_core::choice::parse_parameters;
use askchoice_core::config::AskConfig;
use askchoice_core::input::{InputChannel, InputPresenter};
use askchoice_core::tools::{Tool, ToolCall};
use askchoice_tools::tools::interaction::ask_multiple_choice::TOOL_NAME;
use askchoice_tools::AskMultipleChoiceTool;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::read_input;
use crate::console::CliConsole;
use crate::terminal_ui;

/// Ask the questions in `file` and print the `<answers>` block
pub async fn execute(file: &Path, config: &AskConfig, verbose: bool) -> Result<()> {
    let console = CliConsole::new(verbose);
    let arguments = parse_parameters(&read_input(file)?)
        .with_context(|| format!("Invalid request in '{}'", file.display()))?;

    let (channel, handle) = InputChannel::from_settings(&config.input);
    let ui = match handle {
        Some(handle) => {
            if !::console::Term::stderr().is_term() {
                bail!("No terminal available; pass --auto to answer without one");
            }
            Some(tokio::spawn(terminal_ui::run(handle)))
        }
        None => {
            console.info("Answering automatically");
            None
        }
    };

    let token = CancellationToken::new();
    let interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received");
            interrupt.cancel();
        }
    });

    let tool = AskMultipleChoiceTool::new(Arc::new(InputPresenter::new(channel)))
        .with_settings(&config.choice)
        .with_cancellation_token(token);
    let call = ToolCall::from_json("cli", TOOL_NAME, arguments);

    let result = tool.execute(&call).await;
    if let Some(ui) = ui {
        ui.abort();
    }
    let result = result?;

    if let Some(diagnostic) = result.metadata.get("diagnostic").and_then(|v| v.as_str()) {
        console.warn(diagnostic);
    }
    console.info(&format!(
        "Answered {}/{}",
        result.metadata.get("answered").cloned().unwrap_or_default(),
        result.metadata.get("total").cloned().unwrap_or_default()
    ));
    println!("{}", tool.render_result(&result));
    Ok(())
}
