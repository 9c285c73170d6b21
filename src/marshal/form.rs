//! Path-indexed read/write facade over the sparse store
//!
//! `FormData` owns the store for one marshalling run and borrows the
//! caller's schema. Every access resolves its path through the schema
//! walker first, so reads and writes are either schema-valid or
//! rejected before anything happens.
//!
//! Reads never fabricate state: unwritten scalars resolve to
//! `Resolved::Missing`, unwritten sequences to an empty slice, and
//! mapping paths to a `FormView` bound to that prefix, which is how
//! chained access (`data.get("users")? -> view.get("alice.name")?`)
//! works without materializing anything.

use crate::path::Path;
use crate::schema::{self, Node, SchemaError, TraverseError};

use super::coerce::coerce;
use super::errors::WriteError;
use super::store::{Store, Value};

/// One raw input for a write.
///
/// Form submissions produce `Text`; `Null` represents wholly absent
/// input; `Seq` replaces a sequence wholesale instead of appending.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Null,
    Text(String),
    Seq(Vec<String>),
}

impl From<&str> for Input {
    fn from(raw: &str) -> Self {
        Input::Text(raw.to_owned())
    }
}

impl From<String> for Input {
    fn from(raw: String) -> Self {
        Input::Text(raw)
    }
}

impl From<Option<&str>> for Input {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or(Input::Null, Into::into)
    }
}

impl From<Option<String>> for Input {
    fn from(raw: Option<String>) -> Self {
        raw.map_or(Input::Null, Into::into)
    }
}

impl From<Vec<&str>> for Input {
    fn from(raw: Vec<&str>) -> Self {
        Input::Seq(raw.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<String>> for Input {
    fn from(raw: Vec<String>) -> Self {
        Input::Seq(raw)
    }
}

/// Which container kind a sequence path holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqKind {
    List,
    Tuple,
}

/// The result of resolving a path for reading.
#[derive(Debug, Clone)]
pub enum Resolved<'a> {
    /// Schema-valid scalar path with no input supplied. Falsy, and
    /// distinct from a stored null.
    Missing,
    /// A stored scalar (possibly `Value::Null`).
    Value(&'a Value),
    /// Sequence contents; empty when nothing was written.
    Items(&'a [Value], SeqKind),
    /// A mapping path; access continues through the view.
    Map(FormView<'a>),
}

impl<'a> Resolved<'a> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Resolved::Missing)
    }

    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Resolved::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&'a [Value]> {
        match self {
            Resolved::Items(items, _) => Some(items),
            _ => None,
        }
    }

    pub fn into_view(self) -> Option<FormView<'a>> {
        match self {
            Resolved::Map(view) => Some(view),
            _ => None,
        }
    }
}

/// The marshaller: schema-checked writes into the sparse store, lazy
/// nested reads out of it.
#[derive(Debug, Clone)]
pub struct FormData<'s> {
    schema: &'s Node,
    store: Store,
    coerce: bool,
}

impl<'s> FormData<'s> {
    /// A fresh marshaller with coercion enabled.
    pub fn new(schema: &'s Node) -> Self {
        FormData {
            schema,
            store: Store::new(),
            coerce: true,
        }
    }

    /// A marshaller that keeps raw text verbatim instead of coercing.
    pub fn uncoerced(schema: &'s Node) -> Self {
        FormData {
            schema,
            store: Store::new(),
            coerce: false,
        }
    }

    pub fn schema(&self) -> &'s Node {
        self.schema
    }

    /// Write one value at `path`.
    ///
    /// Sequence paths append single values and replace on `Input::Seq`;
    /// scalar paths coerce. Traversal errors propagate unmodified;
    /// coercion and required failures leave the documented fallback in
    /// the store (raw input, or null) and report what happened.
    pub fn write(&mut self, path: &Path, input: impl Into<Input>) -> Result<(), WriteError> {
        let node = schema::traverse(self.schema, path)?;
        match node {
            Node::Scalar(field) => self.write_scalar(path, field, input.into()),
            Node::List { element } => {
                self.write_sequence(path, element, Value::List, input.into())
            }
            Node::Tuple { element } => {
                self.write_sequence(path, element, Value::Tuple, input.into())
            }
            mapping => Err(TraverseError::Structural {
                path: path.clone(),
                kind: mapping.kind(),
            }
            .into()),
        }
    }

    /// Write with a dotted key.
    pub fn set(&mut self, key: &str, input: impl Into<Input>) -> Result<(), WriteError> {
        self.write(&Path::parse(key), input)
    }

    /// Resolve a path for reading.
    pub fn at(&self, path: &Path) -> Result<Resolved<'_>, TraverseError> {
        resolve(self.schema, &self.store, path)
    }

    /// Resolve a dotted key for reading.
    pub fn get(&self, key: &str) -> Result<Resolved<'_>, TraverseError> {
        self.at(&Path::parse(key))
    }

    /// The root mapping view.
    pub fn root(&self) -> FormView<'_> {
        FormView {
            schema: self.schema,
            store: &self.store,
            prefix: Path::root(),
        }
    }

    /// Distinct top-level segments with stored input, first-seen order.
    pub fn keys(&self) -> Vec<String> {
        self.store.children(&Path::root())
    }

    /// True once any non-null value has been successfully written.
    pub fn has_input(&self) -> bool {
        self.store.touched()
    }

    /// Project the sparse store into an ordinary nested mapping.
    pub fn to_value(&self) -> Value {
        self.store.materialize(&Path::root())
    }

    fn write_scalar(
        &mut self,
        path: &Path,
        field: &schema::Field,
        input: Input,
    ) -> Result<(), WriteError> {
        let raw = match input {
            Input::Null => {
                // Absent input is stored as null, never coerced.
                self.store.insert(path.clone(), Value::Null);
                return Ok(());
            }
            Input::Text(raw) => raw,
            Input::Seq(values) => {
                // Preserve what was submitted for redisplay, same as
                // any other coercion failure.
                self.store
                    .insert(path.clone(), Value::Str(values.join(", ")));
                return Err(WriteError::Coercion {
                    path: path.clone(),
                    message: "multiple values supplied for a single-valued field".into(),
                });
            }
        };

        if !self.coerce {
            self.store.insert(path.clone(), Value::Str(raw));
            return Ok(());
        }

        if field.required && raw.is_empty() {
            self.store.insert(path.clone(), Value::Null);
            return Err(WriteError::Required {
                path: path.clone(),
                message: field.required_message().to_owned(),
            });
        }

        match coerce(field.ty, &raw) {
            Ok(value) => {
                self.store.insert(path.clone(), value);
                Ok(())
            }
            // Empty input on an optional field is non-input, not an
            // error: store null silently.
            Err(_) if raw.is_empty() => {
                self.store.insert(path.clone(), Value::Null);
                Ok(())
            }
            Err(message) => {
                // Preserve exactly what the user typed for redisplay.
                self.store.insert(path.clone(), Value::Str(raw));
                Err(WriteError::Coercion {
                    path: path.clone(),
                    message,
                })
            }
        }
    }

    fn write_sequence(
        &mut self,
        path: &Path,
        element: &Node,
        make: fn(Vec<Value>) -> Value,
        input: Input,
    ) -> Result<(), WriteError> {
        let Node::Scalar(field) = element else {
            return Err(TraverseError::Definition(SchemaError::SequenceOfComposite {
                path: path.clone(),
                kind: element.kind(),
            })
            .into());
        };

        let raws: Vec<Option<String>> = match input {
            Input::Seq(values) => {
                // Assigning a whole sequence replaces the container.
                self.store.remove(path);
                values.into_iter().map(Some).collect()
            }
            Input::Text(raw) => vec![Some(raw)],
            Input::Null => vec![None],
        };

        let mut failure: Option<String> = None;
        for raw in raws {
            let value = match raw {
                None => Value::Null,
                Some(raw) if self.coerce => match coerce(field.ty, &raw) {
                    Ok(value) => value,
                    Err(message) => {
                        failure.get_or_insert(message);
                        Value::Str(raw)
                    }
                },
                Some(raw) => Value::Str(raw),
            };
            self.store.append(path, make, value);
        }

        match failure {
            Some(message) => Err(WriteError::Coercion {
                path: path.clone(),
                message,
            }),
            None => Ok(()),
        }
    }
}

/// A read-only view bound to a mapping prefix, currying the prefix onto
/// further lookups.
#[derive(Debug, Clone)]
pub struct FormView<'a> {
    schema: &'a Node,
    store: &'a Store,
    prefix: Path,
}

impl<'a> FormView<'a> {
    /// The prefix this view is bound to.
    pub fn path(&self) -> &Path {
        &self.prefix
    }

    /// Resolve a dotted key relative to this view.
    pub fn get(&self, key: &str) -> Result<Resolved<'a>, TraverseError> {
        let mut path = self.prefix.clone();
        for segment in key.split('.') {
            path.push(segment);
        }
        resolve(self.schema, self.store, &path)
    }

    /// Distinct immediate child segments with stored input under this
    /// prefix, in first-seen order, no duplicates.
    pub fn keys(&self) -> Vec<String> {
        self.store.children(&self.prefix)
    }

    /// True when any non-null value is stored under this prefix.
    pub fn has_input(&self) -> bool {
        self.store.any_under(&self.prefix)
    }

    /// Project this subtree into an ordinary nested mapping.
    pub fn to_value(&self) -> Value {
        self.store.materialize(&self.prefix)
    }
}

fn resolve<'a>(
    schema: &'a Node,
    store: &'a Store,
    path: &Path,
) -> Result<Resolved<'a>, TraverseError> {
    let node = schema::traverse(schema, path)?;
    Ok(match node {
        Node::Object { .. } | Node::Dynamic { .. } => Resolved::Map(FormView {
            schema,
            store,
            prefix: path.clone(),
        }),
        Node::List { .. } => Resolved::Items(
            store.get(path).and_then(Value::as_items).unwrap_or(&[]),
            SeqKind::List,
        ),
        Node::Tuple { .. } => Resolved::Items(
            store.get(path).and_then(Value::as_items).unwrap_or(&[]),
            SeqKind::Tuple,
        ),
        Node::Scalar(_) => match store.get(path) {
            Some(value) => Resolved::Value(value),
            None => Resolved::Missing,
        },
    })
}
