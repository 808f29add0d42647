//! Command routing logic for CLI

use anyhow::Result;
use askchoice_core::config::AskConfig;

use crate::args::{Cli, Commands};
use crate::commands;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, mut config: AskConfig) -> Result<()> {
    match cli.command {
        Commands::Validate { file, json } => commands::validate::execute(&file, json, &config),
        Commands::Ask {
            file,
            auto,
            timeout,
        } => {
            if auto.is_some() {
                config.input.auto_response = auto;
            }
            if timeout.is_some() {
                config.input.timeout_secs = timeout;
            }
            commands::ask::execute(&file, &config, cli.verbose).await
        }
        Commands::Reconcile { request, response } => {
            commands::reconcile::execute(&request, &response, &config)
        }
    }
}
