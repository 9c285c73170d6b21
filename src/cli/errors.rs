//! CLI error types

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Schema file could not be read
    #[error("cannot read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Schema file is not valid JSON for the schema model
    #[error("cannot parse schema file: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema definition is malformed
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// An input argument is not of the form key=value
    #[error("invalid pair '{0}': expected dotted.key=value")]
    BadPair(String),
}
