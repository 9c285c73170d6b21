//! Error accumulator tree
//!
//! A recursive tree keyed exactly like the data, each node holding the
//! messages recorded for that exact path. Coercion and validation
//! failures are localized: recording a message at `user.age` never
//! touches `user` or the root, yet the root's truthiness reflects every
//! descendant. Templates and tests may probe any path — present or not —
//! without guarding existence; probing never mutates the tree.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::path::Path;

/// Per-path validation/coercion messages, mirroring the data shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Errors {
    messages: Vec<String>,
    fields: IndexMap<String, Errors>,
}

impl Errors {
    pub fn new() -> Self {
        Errors::default()
    }

    /// Record a message at this node. Messages never propagate to
    /// ancestors; only truthiness does.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Messages recorded at this exact node.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// True when neither this node nor any descendant has a message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.fields.values().all(Errors::is_empty)
    }

    /// Total number of messages in this subtree.
    pub fn count(&self) -> usize {
        self.messages.len() + self.fields.values().map(Errors::count).sum::<usize>()
    }

    /// The child node for one segment, if it exists.
    pub fn get(&self, segment: &str) -> Option<&Errors> {
        self.fields.get(segment)
    }

    /// The node at `path`, if every segment exists. Non-mutating: a
    /// probe of a never-recorded path simply returns `None`.
    pub fn at(&self, path: &Path) -> Option<&Errors> {
        let mut node = self;
        for segment in path.segments() {
            node = node.fields.get(segment)?;
        }
        Some(node)
    }

    /// Messages at `path`; empty for paths that were never recorded.
    pub fn messages_at(&self, path: &Path) -> &[String] {
        self.at(path).map(Errors::messages).unwrap_or(&[])
    }

    /// True when the subtree at `path` holds at least one message.
    pub fn any_at(&self, path: &Path) -> bool {
        self.at(path).is_some_and(|node| !node.is_empty())
    }

    /// The node at `path`, creating empty intermediate nodes as needed.
    /// This is the only way the tree grows.
    pub fn get_or_create(&mut self, path: &Path) -> &mut Errors {
        let mut node = self;
        for segment in path.segments() {
            node = node.fields.entry(segment.clone()).or_default();
        }
        node
    }

    /// Named children, in first-recorded order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Errors)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.messages.is_empty() {
            map.serialize_entry("messages", &self.messages)?;
        }
        for (name, child) in &self.fields {
            if !child.is_empty() {
                map.serialize_entry(name, child)?;
            }
        }
        map.end()
    }
}
