//! askchoice command-line interface
//!
//! Drives the multiple-choice protocol from a terminal:
//!
//! - `askchoice validate <FILE>`: build a request from JSON or tagged
//!   parameters and report the normalized questions or the structural error
//! - `askchoice ask <FILE>`: show the questions, collect answers and print the
//!   `<answers>` block handed back to the caller
//! - `askchoice reconcile <REQUEST> <RESPONSE>`: map a stored response payload
//!   onto a request's option labels
//!
//! Logging goes to stderr. `RUST_LOG` overrides the configured level.

#![allow(clippy::collapsible_if)]
#![allow(clippy::derivable_impls)]

mod args;
mod commands;
mod console;
mod router;
mod terminal_ui;

use askchoice_core::config::{LoggingConfig, load_config};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use args::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging, cli.verbose);

    router::route(cli, config).await
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => builder.json().init(),
        "pretty" => builder.pretty().init(),
        _ => builder.compact().init(),
    }
}
