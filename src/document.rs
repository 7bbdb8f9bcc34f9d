//! Ordered documents and their normalization into plain maps.
//!
//! A document store driver hands back its own ordered mapping type. Code that
//! feeds YAML or JSON writers wants plain [`Map`]s instead, so that no
//! driver-specific type information leaks into the output. The conversion
//! only needs an ordered key/value view, expressed by [`OrderedDocument`];
//! [`Document`] is the driver-shaped type carried by [`Value::Document`].
//!
//! ## Examples
//!
//! ```rust
//! use object_marshal::{bson_ordered_hash_to_hash, Document, Value};
//!
//! let mut disk = Document::new();
//! disk.insert("size", Value::from(500));
//!
//! let mut doc = Document::new();
//! doc.insert("@name", Value::from("node01"));
//! doc.insert("@disks", Value::Array(vec![Value::Document(disk)]));
//!
//! let map = bson_ordered_hash_to_hash(&doc);
//! let disks = map.get("@disks").and_then(|v| v.as_array()).unwrap();
//! assert!(disks[0].is_object());
//! ```

use crate::{Map, Value};

/// An ordered key/value sequence, the only capability normalization needs.
pub trait OrderedDocument {
    /// Returns the entries in document order.
    fn ordered_entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_>;
}

impl OrderedDocument for Map {
    fn ordered_entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl OrderedDocument for Document {
    fn ordered_entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        Box::new(self.iter())
    }
}

/// A driver-native ordered document.
///
/// Keys keep the order they were first inserted in; inserting an existing
/// key replaces its value in place.
///
/// # Examples
///
/// ```rust
/// use object_marshal::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.insert("_id", Value::from(1));
/// doc.insert("@name", Value::from("a"));
/// doc.insert("_id", Value::from(2));
///
/// let keys: Vec<_> = doc.keys().collect();
/// assert_eq!(keys, vec!["_id", "@name"]);
/// assert_eq!(doc.get("_id"), Some(&Value::from(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: Vec<(String, Value)>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Document::default()
    }

    /// Inserts a key, returning the previous value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut doc = Document::new();
        for (key, value) in iter {
            doc.insert(key, value);
        }
        doc
    }
}

/// Converts an ordered document into a plain [`Map`], recursively.
///
/// Nested documents become objects, arrays are walked with
/// [`bson_hash_array_to_hash_array`], and every other value is copied as is.
/// Key order and leaf values are preserved. Since [`Map`] is itself an
/// [`OrderedDocument`], running the conversion on its own output returns an
/// identical map.
///
/// # Examples
///
/// ```rust
/// use object_marshal::{bson_ordered_hash_to_hash, Document, Value};
///
/// let doc: Document = vec![("a".to_string(), Value::from(1))].into_iter().collect();
/// let once = bson_ordered_hash_to_hash(&doc);
/// let twice = bson_ordered_hash_to_hash(&once);
/// assert_eq!(once, twice);
/// ```
#[must_use]
pub fn bson_ordered_hash_to_hash<D>(document: &D) -> Map
where
    D: OrderedDocument + ?Sized,
{
    document
        .ordered_entries()
        .map(|(key, value)| (key.to_string(), normalize_value(value)))
        .collect()
}

/// Converts every document found in an array (at any depth) into a plain map.
#[must_use]
pub fn bson_hash_array_to_hash_array(array: &[Value]) -> Vec<Value> {
    array.iter().map(normalize_value).collect()
}

fn normalize_value(value: &Value) -> Value {
    match value {
        Value::Document(doc) => Value::Object(bson_ordered_hash_to_hash(doc)),
        Value::Object(obj) => Value::Object(bson_ordered_hash_to_hash(obj)),
        Value::Array(arr) => Value::Array(bson_hash_array_to_hash_array(arr)),
        other => other.clone(),
    }
}

impl Value {
    /// Returns a copy of this value with every [`Document`] replaced by a
    /// plain object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_marshal::{Document, Value};
    ///
    /// let doc = Value::Document(Document::new());
    /// assert!(doc.normalized().is_object());
    /// assert_eq!(Value::from(3).normalized(), Value::from(3));
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Value {
        normalize_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(entries: Vec<(&str, Value)>) -> Document {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_nested_documents_become_objects() {
        let inner = doc(vec![("port", Value::from(22))]);
        let outer = doc(vec![
            ("host", Value::from("node01")),
            ("ssh", Value::Document(inner)),
        ]);

        let map = bson_ordered_hash_to_hash(&outer);
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["host", "ssh"]);

        let ssh = map.get("ssh").and_then(|v| v.as_object()).unwrap();
        assert_eq!(ssh.get("port"), Some(&Value::from(22)));
    }

    #[test]
    fn test_documents_inside_nested_arrays() {
        let leaf = doc(vec![("k", Value::from("v"))]);
        let array = vec![
            Value::from(1),
            Value::Array(vec![Value::Document(leaf.clone())]),
            Value::Document(leaf),
        ];

        let converted = bson_hash_array_to_hash_array(&array);
        assert_eq!(converted[0], Value::from(1));

        let nested = converted[1].as_array().unwrap();
        assert!(nested[0].is_object());
        assert!(converted[2].is_object());
    }

    #[test]
    fn test_documents_inside_plain_objects() {
        let leaf = doc(vec![("k", Value::from("v"))]);
        let mut plain = Map::new();
        plain.insert("leaf".to_string(), Value::Document(leaf));
        let outer = doc(vec![("plain", Value::Object(plain))]);

        let map = bson_ordered_hash_to_hash(&outer);
        let leaf = map.get("plain").and_then(|v| v.get("leaf")).unwrap();
        assert!(leaf.is_object());
    }

    #[test]
    fn test_leaves_are_untouched() {
        let outer = doc(vec![
            ("sym", Value::symbol("ready")),
            ("null", Value::Null),
            ("float", Value::from(1.5)),
        ]);
        let map = bson_ordered_hash_to_hash(&outer);
        assert_eq!(map.get("sym"), Some(&Value::symbol("ready")));
        assert_eq!(map.get("null"), Some(&Value::Null));
        assert_eq!(map.get("float"), Some(&Value::from(1.5)));
    }

    #[test]
    fn test_empty_document() {
        assert!(bson_ordered_hash_to_hash(&Document::new()).is_empty());
        assert!(bson_hash_array_to_hash_array(&[]).is_empty());
    }
}
