//! Reserved key names and key sanitization.
//!
//! Persisted field names carry an `@` sigil (`@name`, `@classname`). A field
//! whose name, with the sigil dropped, begins with `_` is internal: it is
//! never extracted and never overwritten (`@_lock`, or the store's own `_id`).

use crate::Map;

/// Leading sigil of a persisted field name.
pub const FIELD_SIGIL: char = '@';

/// Leading character of an internal field name, after the sigil.
pub const INTERNAL_MARKER: char = '_';

/// Key naming the concrete type of a nested object mapping.
pub const TYPE_TAG: &str = "@classname";

/// Bookkeeping key left out of the JSON projection.
pub const NOUN_KEY: &str = "@noun";

/// Returns `true` if `name` denotes an internal field.
///
/// # Examples
///
/// ```rust
/// use object_marshal::is_internal;
///
/// assert!(is_internal("_id"));
/// assert!(is_internal("@_secret"));
/// assert!(!is_internal("@name"));
/// assert!(!is_internal("name_"));
/// ```
#[must_use]
pub fn is_internal(name: &str) -> bool {
    name.strip_prefix(FIELD_SIGIL)
        .unwrap_or(name)
        .starts_with(INTERNAL_MARKER)
}

/// Returns a copy of `map` with one leading `@` stripped from every key.
///
/// Values are not touched and nested maps keep their keys. If two keys only
/// differ by the sigil, the one that comes later in insertion order supplies
/// the value while the position of the first one is kept.
///
/// # Examples
///
/// ```rust
/// use object_marshal::{sanitize_hash, value};
///
/// let map = value!({ "@a": 1, "@b": 2 });
/// let clean = sanitize_hash(map.as_object().unwrap());
/// assert_eq!(clean, *value!({ "a": 1, "b": 2 }).as_object().unwrap());
/// ```
#[must_use]
pub fn sanitize_hash(map: &Map) -> Map {
    map.iter()
        .map(|(key, value)| {
            let key = key.strip_prefix(FIELD_SIGIL).unwrap_or(key);
            (key.to_string(), value.clone())
        })
        .collect()
}
