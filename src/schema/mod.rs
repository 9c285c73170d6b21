//! Schema subsystem
//!
//! The caller supplies a nested, immutable description of the expected
//! data shape; the walker resolves dotted paths against it and rejects
//! paths the schema does not define. Sequences are only allowed as
//! end-points, and their element type must be scalar.

mod errors;
mod types;
mod walker;

pub use errors::{SchemaError, SchemaResult, TraverseError};
pub use types::{Field, Node, ScalarType};
pub use walker::{traverse, validate};
