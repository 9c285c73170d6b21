//! formtree - schema-driven marshalling of flat form parameters
//!
//! Converts a flat, ordered sequence of `(dotted.key, raw value)` pairs
//! — the shape of an HTML form submission or a flattened query string —
//! into nested, schema-typed data, while independently accumulating a
//! parallel tree of validation errors that mirrors the data's shape.
//!
//! ```
//! use formtree::{marshall, Node, ScalarType, Value};
//!
//! let schema = Node::object([(
//!     "user",
//!     Node::object([
//!         ("name", Node::string()),
//!         ("age", Node::int()),
//!         ("friends", Node::list(ScalarType::String)),
//!     ]),
//! )]);
//!
//! let params = [
//!     ("user.name", "Fred Kaputnik"),
//!     ("user.age", "42"),
//!     ("user.friends", "stefan"),
//!     ("user.friends", "malthe"),
//! ];
//!
//! let (data, errors) = marshall(params, &schema).unwrap();
//! assert!(errors.is_empty());
//! assert_eq!(data.get("user.age").unwrap().value(), Some(&Value::Int(42)));
//! ```

pub mod cli;
pub mod marshal;
pub mod path;
pub mod report;
pub mod schema;

pub use marshal::{marshall, FormData, FormView, Input, Resolved, SeqKind, Value, WriteError};
pub use path::Path;
pub use report::Errors;
pub use schema::{Field, Node, ScalarType, SchemaError, TraverseError};
