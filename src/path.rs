//! Dotted-path codec
//!
//! Form keys arrive as dotted strings (`"user.age"`). Internally every
//! subsystem — schema walker, sparse store, error tree — addresses
//! locations by an ordered sequence of string segments. `Path` is that
//! sequence, usable as a map key.

use std::fmt;

/// An ordered sequence of string segments addressing a location in the
/// schema, data and error trees.
///
/// The empty path is the root prefix of every view; `Path::parse` of a
/// form key never produces it (splitting `""` yields one empty segment).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<String>);

impl Path {
    /// The empty path (root prefix).
    pub fn root() -> Self {
        Path(Vec::new())
    }

    /// Parse a dotted key (`"user.age"`) into segments.
    pub fn parse(key: &str) -> Self {
        Path(key.split('.').map(str::to_owned).collect())
    }

    /// Build a path from explicit segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Path(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend this path with one more segment, in place.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// A new path with one more segment appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Path(segments)
    }

    /// Whether `prefix` is a (non-strict) prefix of this path.
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }

    /// The last segment, if any.
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Path::parse(key)
    }
}

impl FromIterator<String> for Path {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}
