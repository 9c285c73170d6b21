//! CLI module for formtree
//!
//! Provides the command-line interface:
//! - check: validate a schema definition file
//! - marshal: one-shot marshalling of key=value pairs

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, marshal, run_command};
pub use errors::{CliError, CliResult};

/// Parse arguments, initialize logging and dispatch.
pub fn run() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    run_command(Cli::parse_args())
}
