//! Marshalling error types

use thiserror::Error;

use crate::path::Path;
use crate::schema::TraverseError;

/// A single write that could not be completed as requested.
///
/// Traversal failures mean the key does not belong to the schema at
/// all; coercion and required failures are per-field validation
/// results, after which the store still holds the documented fallback
/// (raw input, or null).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WriteError {
    /// The path does not resolve against the schema.
    #[error(transparent)]
    Traverse(#[from] TraverseError),

    /// The value could not be converted to the declared scalar type.
    /// The raw input has been preserved in the data for redisplay.
    #[error("{message}")]
    Coercion { path: Path, message: String },

    /// Empty input on a required field. Null has been stored.
    #[error("{message}")]
    Required { path: Path, message: String },
}
