//! CLI command implementations

use std::fs;
use std::path::Path as FsPath;

use serde_json::json;
use tracing::info;

use crate::marshal::marshall;
use crate::schema::{self, Node};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command line.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Check { schema } => check(&schema),
        Command::Marshal { schema, pairs } => marshal(&schema, &pairs),
    }
}

/// Load and validate a schema definition file.
pub fn check(path: &FsPath) -> CliResult<()> {
    let schema = load_schema(path)?;
    schema::validate(&schema)?;
    info!(schema = %path.display(), "schema is well-formed");
    println!("ok: {}", path.display());
    Ok(())
}

/// Marshal key=value pairs against a schema file and print the data and
/// error trees as JSON.
pub fn marshal(path: &FsPath, pairs: &[String]) -> CliResult<()> {
    let schema = load_schema(path)?;

    let mut params = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::BadPair(pair.clone()))?;
        params.push((key, value));
    }

    let (data, errors) = marshall(params, &schema)?;
    let output = json!({
        "data": data.to_value(),
        "errors": errors,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_schema(path: &FsPath) -> CliResult<Node> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
