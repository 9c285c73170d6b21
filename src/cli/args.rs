//! CLI argument definitions using clap
//!
//! Commands:
//! - formtree check --schema <path>
//! - formtree marshal --schema <path> [key=value ...]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formtree - schema-driven marshalling of flat form parameters
#[derive(Parser, Debug)]
#[command(name = "formtree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a schema definition file
    Check {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,
    },

    /// Marshal key=value pairs against a schema and print the result
    Marshal {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,

        /// Input pairs, as dotted.key=value, in submission order
        #[arg(value_name = "KEY=VALUE")]
        pairs: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
