//! Schema error types
//!
//! Two distinct failure families live here:
//!
//! - `SchemaError`: the schema itself is malformed. This is a
//!   programmer error in schema authoring; it is fatal and is never
//!   swallowed by the marshalling orchestrator.
//! - `TraverseError`: a submitted key does not correspond to any
//!   schema-defined location. These are expected noise from the
//!   surrounding form and are skipped by the orchestrator.

use thiserror::Error;

use crate::path::Path;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// A malformed schema definition. Fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A list/tuple element is a composite node. Sequences of composite
    /// types are not supported: sequences are only allowed as
    /// end-points.
    #[error("invalid schema: sequence element at '{path}' must be a scalar type, got {kind}")]
    SequenceOfComposite {
        /// Path of the offending sequence node
        path: Path,
        /// Kind of the offending element node
        kind: &'static str,
    },
}

/// A path that cannot be resolved against the schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraverseError {
    /// A fixed mapping has no child of this name.
    #[error("unknown field '{segment}' under '{path}'")]
    UnknownPath {
        /// Prefix resolved so far
        path: Path,
        /// The unmatched segment
        segment: String,
    },

    /// A segment is not representable as the dynamic mapping's key type.
    #[error("segment '{segment}' is not a valid {expected} key under '{path}'")]
    TypeMismatch {
        path: Path,
        segment: String,
        expected: &'static str,
    },

    /// Descent attempted below a terminal node, or a raw value written
    /// directly to a mapping node.
    #[error("'{path}' is a {kind} and admits no further descent")]
    Structural { path: Path, kind: &'static str },

    /// The schema itself is malformed; propagated unswallowed.
    #[error(transparent)]
    Definition(#[from] SchemaError),
}

impl TraverseError {
    /// Whether this error is fatal (schema authoring mistake) rather
    /// than per-pair input noise.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TraverseError::Definition(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = TraverseError::UnknownPath {
            path: Path::parse("user"),
            segment: "bogus".into(),
        };
        let text = err.to_string();
        assert!(text.contains("bogus"));
        assert!(text.contains("user"));
    }

    #[test]
    fn test_definition_errors_are_fatal() {
        let err = TraverseError::Definition(SchemaError::SequenceOfComposite {
            path: Path::parse("users"),
            kind: "object",
        });
        assert!(err.is_fatal());
        assert!(!TraverseError::Structural {
            path: Path::parse("tags"),
            kind: "list",
        }
        .is_fatal());
    }
}
