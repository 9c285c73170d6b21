//! Sparse path-keyed store
//!
//! The entire marshalling result lives in one flat, insertion-ordered
//! map from full path to leaf value or accumulating container. The
//! nested view handed to callers is always a projection of this map,
//! never the other way around.

use indexmap::{IndexMap, IndexSet};
use serde::ser::{Serialize, Serializer};

use crate::path::Path;

/// A marshalled value.
///
/// Slots in the store hold scalars, `Null` and accumulating
/// `List`/`Tuple` containers; `Map` appears only in materialized
/// projections.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicitly absent input (distinct from an unwritten path)
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Str(v) => serializer.serialize_str(v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::List(items) | Value::Tuple(items) => serializer.collect_seq(items),
            Value::Map(map) => serializer.collect_map(map),
        }
    }
}

/// Flat, sparse storage for the marshalling result.
#[derive(Debug, Clone, Default)]
pub(crate) struct Store {
    slots: IndexMap<Path, Value>,
    /// Set whenever any non-null value is successfully stored; gives
    /// the whole structure a truth value independent of traversal.
    touched: bool,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    pub fn get(&self, path: &Path) -> Option<&Value> {
        self.slots.get(path)
    }

    pub fn insert(&mut self, path: Path, value: Value) {
        if !value.is_null() {
            self.touched = true;
        }
        self.slots.insert(path, value);
    }

    /// Append one element to the container at `path`, creating it empty
    /// first if absent. The container kind is fixed by the schema, so a
    /// slot never changes kind once created.
    pub fn append(&mut self, path: &Path, make: fn(Vec<Value>) -> Value, element: Value) {
        if !element.is_null() {
            self.touched = true;
        }
        let slot = self
            .slots
            .entry(path.clone())
            .or_insert_with(|| make(Vec::new()));
        if let Value::List(items) | Value::Tuple(items) = slot {
            items.push(element);
        }
    }

    pub fn remove(&mut self, path: &Path) {
        self.slots.shift_remove(path);
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    /// Whether any slot under `prefix` holds a non-null value (list and
    /// tuple slots count element-wise).
    pub fn any_under(&self, prefix: &Path) -> bool {
        self.slots.iter().any(|(path, value)| {
            path.starts_with(prefix)
                && match value {
                    Value::Null => false,
                    Value::List(items) | Value::Tuple(items) => {
                        items.iter().any(|item| !item.is_null())
                    }
                    _ => true,
                }
        })
    }

    /// Distinct immediate child segments below `prefix`, in first-seen
    /// order.
    pub fn children(&self, prefix: &Path) -> Vec<String> {
        let mut seen: IndexSet<&str> = IndexSet::new();
        for path in self.slots.keys() {
            if path.len() > prefix.len() && path.starts_with(prefix) {
                seen.insert(path.segments()[prefix.len()].as_str());
            }
        }
        seen.into_iter().map(str::to_owned).collect()
    }

    /// Project the slots under `prefix` into an ordinary nested
    /// mapping. Read-only; the store remains the source of truth.
    pub fn materialize(&self, prefix: &Path) -> Value {
        let mut root: IndexMap<String, Value> = IndexMap::new();
        'slots: for (path, value) in &self.slots {
            if !path.starts_with(prefix) {
                continue;
            }
            let relative = &path.segments()[prefix.len()..];
            let Some((leaf, interior)) = relative.split_last() else {
                continue;
            };
            let mut cursor = &mut root;
            for segment in interior {
                // The schema never defines a path as both leaf and
                // mapping, so interior entries are always maps.
                let Value::Map(next) = cursor
                    .entry(segment.clone())
                    .or_insert_with(|| Value::Map(IndexMap::new()))
                else {
                    continue 'slots;
                };
                cursor = next;
            }
            cursor.insert(leaf.clone(), value.clone());
        }
        Value::Map(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut store = Store::new();
        store.insert(Path::parse("user.age"), Value::Int(42));
        assert_eq!(store.get(&Path::parse("user.age")), Some(&Value::Int(42)));
        assert_eq!(store.get(&Path::parse("user.name")), None);
    }

    #[test]
    fn test_touched_tracks_non_null_writes_only() {
        let mut store = Store::new();
        assert!(!store.touched());
        store.insert(Path::parse("a"), Value::Null);
        assert!(!store.touched());
        store.insert(Path::parse("b"), Value::Str("".into()));
        assert!(store.touched());
    }

    #[test]
    fn test_append_creates_and_extends_container() {
        let mut store = Store::new();
        let path = Path::parse("tags");
        store.append(&path, Value::List, Value::Str("a".into()));
        store.append(&path, Value::List, Value::Str("b".into()));
        assert_eq!(
            store.get(&path),
            Some(&Value::List(vec![
                Value::Str("a".into()),
                Value::Str("b".into())
            ]))
        );
    }

    #[test]
    fn test_children_first_seen_order_distinct() {
        let mut store = Store::new();
        store.insert(Path::parse("users.bob.name"), Value::Str("Bob".into()));
        store.insert(Path::parse("users.alice.name"), Value::Str("Alice".into()));
        store.insert(Path::parse("users.bob.id"), Value::Int(1));
        assert_eq!(store.children(&Path::parse("users")), ["bob", "alice"]);
        assert_eq!(store.children(&Path::parse("users.bob")), ["name", "id"]);
        assert!(store.children(&Path::parse("users.carol")).is_empty());
    }

    #[test]
    fn test_any_under_prefix() {
        let mut store = Store::new();
        store.insert(Path::parse("a.x"), Value::Null);
        store.insert(Path::parse("b.y"), Value::Int(1));
        assert!(!store.any_under(&Path::parse("a")));
        assert!(store.any_under(&Path::parse("b")));
        assert!(store.any_under(&Path::root()));
    }

    #[test]
    fn test_materialize_nests_by_path() {
        let mut store = Store::new();
        store.insert(Path::parse("user.name"), Value::Str("Fred".into()));
        store.insert(Path::parse("user.age"), Value::Int(42));
        store.insert(Path::parse("top"), Value::Bool(true));
        let nested = store.materialize(&Path::root());
        let map = nested.as_map().unwrap();
        assert_eq!(map["top"], Value::Bool(true));
        let user = map["user"].as_map().unwrap();
        assert_eq!(user["name"], Value::Str("Fred".into()));
        assert_eq!(user["age"], Value::Int(42));
    }

    #[test]
    fn test_materialize_subtree() {
        let mut store = Store::new();
        store.insert(Path::parse("user.name"), Value::Str("Fred".into()));
        store.insert(Path::parse("other"), Value::Int(1));
        let nested = store.materialize(&Path::parse("user"));
        let map = nested.as_map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["name"], Value::Str("Fred".into()));
    }

    #[test]
    fn test_value_serializes_as_plain_json() {
        let value = Value::Map(IndexMap::from([
            ("n".to_string(), Value::Int(3)),
            ("t".to_string(), Value::Tuple(vec![Value::Int(1), Value::Null])),
        ]));
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({ "n": 3, "t": [1, null] }));
    }
}
