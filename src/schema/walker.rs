//! Schema walker
//!
//! Resolves a path against a schema tree, one segment at a time. The
//! walker is a pure function with no side effects; the marshaller calls
//! it before every read and write, so a path is either fully valid or
//! rejected before anything is stored.

use crate::path::Path;

use super::errors::{SchemaError, SchemaResult, TraverseError};
use super::types::Node;

/// Resolve `path` against `schema`, returning the node it addresses.
///
/// Fixed mappings require a literal key; dynamic mappings admit any
/// segment representable as their key type. Reaching a scalar or
/// sequence before the path is exhausted is a structural error, except
/// that a sequence with a composite element is reported as the
/// definition error it really is.
pub fn traverse<'s>(schema: &'s Node, path: &Path) -> Result<&'s Node, TraverseError> {
    let mut node = schema;
    let mut walked = Path::root();

    for segment in path.segments() {
        match node {
            Node::Object { fields } => {
                node = fields
                    .get(segment)
                    .ok_or_else(|| TraverseError::UnknownPath {
                        path: walked.clone(),
                        segment: segment.clone(),
                    })?;
            }
            Node::Dynamic { key, value } => {
                if !key.admits(segment) {
                    return Err(TraverseError::TypeMismatch {
                        path: walked.clone(),
                        segment: segment.clone(),
                        expected: key.name(),
                    });
                }
                node = value;
            }
            Node::List { element } | Node::Tuple { element } => {
                // A malformed element takes precedence over the
                // structural complaint about descending past it.
                check_element(element, &walked)?;
                return Err(TraverseError::Structural {
                    path: walked.clone(),
                    kind: node.kind(),
                });
            }
            Node::Scalar(_) => {
                return Err(TraverseError::Structural {
                    path: walked.clone(),
                    kind: "scalar",
                });
            }
        }
        walked.push(segment.clone());
    }

    if let Node::List { element } | Node::Tuple { element } = node {
        check_element(element, path)?;
    }

    Ok(node)
}

/// Validate an entire schema up front, before any input is seen.
///
/// Traversal reports definition errors lazily, only for paths that are
/// actually touched; schema-loading callers (the CLI `check` command)
/// want them eagerly instead.
pub fn validate(schema: &Node) -> SchemaResult<()> {
    validate_at(schema, &Path::root())
}

fn validate_at(node: &Node, at: &Path) -> SchemaResult<()> {
    match node {
        Node::Scalar(_) => Ok(()),
        Node::List { element } | Node::Tuple { element } => check_element(element, at),
        Node::Object { fields } => {
            for (name, child) in fields {
                validate_at(child, &at.child(name.clone()))?;
            }
            Ok(())
        }
        Node::Dynamic { value, .. } => validate_at(value, &at.child("*")),
    }
}

fn check_element(element: &Node, at: &Path) -> SchemaResult<()> {
    match element {
        Node::Scalar(_) => Ok(()),
        other => Err(SchemaError::SequenceOfComposite {
            path: at.clone(),
            kind: other.kind(),
        }),
    }
}
