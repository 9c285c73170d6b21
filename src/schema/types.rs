//! Schema type definitions
//!
//! A schema is an immutable nested description of the expected data
//! shape, supplied by the caller and consumed by the walker. It is a
//! closed tagged-variant type: mappings (fixed or dynamic) descend
//! further, scalars and sequences terminate descent.
//!
//! Schemas serialize as internally tagged JSON, e.g.
//!
//! ```json
//! {
//!   "type": "object",
//!   "fields": {
//!     "age":  { "type": "scalar", "of": "int", "required": true },
//!     "tags": { "type": "list", "element": { "type": "scalar", "of": "string" } }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scalar leaf types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
}

impl ScalarType {
    /// Type name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::Bool => "bool",
        }
    }

    /// Whether a path segment is admissible as a dynamic key of this
    /// type. Segments are always strings, so for non-string key types
    /// this is a representability check.
    pub(crate) fn admits(&self, segment: &str) -> bool {
        match self {
            ScalarType::String => true,
            ScalarType::Int => segment.parse::<i64>().is_ok(),
            ScalarType::Float => segment.parse::<f64>().is_ok(),
            ScalarType::Bool => matches!(segment, "true" | "false"),
        }
    }
}

/// A scalar leaf: the declared type plus the required-input constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Declared scalar type
    #[serde(rename = "of")]
    pub ty: ScalarType,
    /// Whether empty submitted input is a validation error
    #[serde(default)]
    pub required: bool,
    /// Message recorded when the required constraint fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Field {
    pub fn new(ty: ScalarType) -> Self {
        Field {
            ty,
            required: false,
            message: None,
        }
    }

    pub fn required(ty: ScalarType) -> Self {
        Field {
            ty,
            required: true,
            message: None,
        }
    }

    /// The message recorded when required input is missing.
    pub fn required_message(&self) -> &str {
        self.message.as_deref().unwrap_or("Required field")
    }
}

/// One node of a schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Leaf accepting a single value of a scalar type
    Scalar(Field),
    /// Ordered sequence; repeated writes append, order preserved
    List { element: Box<Node> },
    /// Like `List`, but the materialized container is fixed after
    /// marshalling
    Tuple { element: Box<Node> },
    /// Fixed mapping with a known key set
    Object { fields: IndexMap<String, Node> },
    /// Dynamic mapping: any segment admissible as `key` becomes a live
    /// key, all sharing the `value` schema
    Dynamic { key: ScalarType, value: Box<Node> },
}

impl Node {
    /// Optional string leaf.
    pub fn string() -> Self {
        Node::Scalar(Field::new(ScalarType::String))
    }

    /// Optional integer leaf.
    pub fn int() -> Self {
        Node::Scalar(Field::new(ScalarType::Int))
    }

    /// Optional float leaf.
    pub fn float() -> Self {
        Node::Scalar(Field::new(ScalarType::Float))
    }

    /// Optional boolean leaf.
    pub fn boolean() -> Self {
        Node::Scalar(Field::new(ScalarType::Bool))
    }

    /// Required leaf with the default message.
    pub fn required(ty: ScalarType) -> Self {
        Node::Scalar(Field::required(ty))
    }

    /// Required leaf with a declared message.
    pub fn required_with(ty: ScalarType, message: impl Into<String>) -> Self {
        Node::Scalar(Field {
            ty,
            required: true,
            message: Some(message.into()),
        })
    }

    /// List of a scalar element type.
    pub fn list(ty: ScalarType) -> Self {
        Node::List {
            element: Box::new(Node::Scalar(Field::new(ty))),
        }
    }

    /// Tuple of a scalar element type.
    pub fn tuple(ty: ScalarType) -> Self {
        Node::Tuple {
            element: Box::new(Node::Scalar(Field::new(ty))),
        }
    }

    /// List of an arbitrary element node. Only scalar elements survive
    /// traversal; composites are definition errors.
    pub fn list_of(element: Node) -> Self {
        Node::List {
            element: Box::new(element),
        }
    }

    /// Tuple of an arbitrary element node.
    pub fn tuple_of(element: Node) -> Self {
        Node::Tuple {
            element: Box::new(element),
        }
    }

    /// Fixed mapping from an ordered list of named children.
    pub fn object<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Node::Object {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Dynamic mapping admitting arbitrary keys of the given type.
    pub fn dynamic(key: ScalarType, value: Node) -> Self {
        Node::Dynamic {
            key,
            value: Box::new(value),
        }
    }

    /// Node kind for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::List { .. } => "list",
            Node::Tuple { .. } => "tuple",
            Node::Object { .. } => "object",
            Node::Dynamic { .. } => "dynamic",
        }
    }

    /// Whether this node is a mapping (fixed or dynamic).
    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Object { .. } | Node::Dynamic { .. })
    }
}
