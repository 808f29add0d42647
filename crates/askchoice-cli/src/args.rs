//! CLI argument definitions using clap

use askchoice_core::config::AutoResponseMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "askchoice")]
#[command(about = "Ask multiple-choice questions and reconcile the answers")]
#[command(
    long_about = r#"Ask multiple-choice questions and reconcile the answers

USAGE:
  askchoice validate request.json        # Check a request
  askchoice ask request.xml              # Ask in the terminal
  askchoice ask request.json --auto skip # Answer without a human
  askchoice reconcile request.json response.json

Requests are JSON tool arguments or XML-style tagged parameters."#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "ASKCHOICE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a request and report the questions or the structural error
    Validate {
        /// Request file (JSON or tagged parameters)
        file: PathBuf,

        /// Print the normalized request as JSON
        #[arg(long)]
        json: bool,
    },

    /// Present a request in the terminal and print the answers
    Ask {
        /// Request file (JSON or tagged parameters)
        file: PathBuf,

        /// Answer automatically: default, first_option, always_skip, always_cancel
        #[arg(long)]
        auto: Option<AutoResponseMode>,

        /// Seconds to wait for answers
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Reconcile a stored response payload against a request
    Reconcile {
        /// Request file (JSON or tagged parameters)
        request: PathBuf,

        /// Response payload file, or `-` for stdin
        response: PathBuf,
    },
}
