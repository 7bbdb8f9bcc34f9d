//! Symbol encoding for string-only formats.
//!
//! JSON and most YAML consumers have no symbol type. Before a tree is written
//! out, [`encode_symbols_in_hash`] turns every [`Value::Symbol`] into a string
//! carrying a leading marker (`:` by default); [`decode_symbols_in_hash`]
//! reverses it after reading. Only values are rewritten, never map keys.
//!
//! A plain string that already starts with the marker is indistinguishable
//! from an encoded symbol and decodes as a symbol.
//!
//! ## Examples
//!
//! ```rust
//! use object_marshal::{decode_symbols_in_hash, encode_symbols_in_hash, value, Value};
//!
//! let tree = Value::Array(vec![Value::symbol("boot"), Value::from("plain")]);
//! let encoded = encode_symbols_in_hash(&tree);
//! assert_eq!(encoded, value!([":boot", "plain"]));
//! assert_eq!(decode_symbols_in_hash(&encoded), tree);
//! ```

use crate::{Document, MarshalOptions, Value};

/// Default marker placed in front of an encoded symbol's text.
pub const SYMBOL_MARKER: char = ':';

/// Encodes every symbol in `value` with the default marker.
#[must_use]
pub fn encode_symbols_in_hash(value: &Value) -> Value {
    encode_with_marker(value, SYMBOL_MARKER)
}

/// Decodes every marker-prefixed string in `value` back into a symbol.
#[must_use]
pub fn decode_symbols_in_hash(value: &Value) -> Value {
    decode_with_marker(value, SYMBOL_MARKER)
}

/// Encodes symbols using the marker configured in `options`.
///
/// # Examples
///
/// ```rust
/// use object_marshal::{encode_symbols_with, MarshalOptions, Value};
///
/// let options = MarshalOptions::new().with_symbol_marker('~');
/// let encoded = encode_symbols_with(&Value::symbol("x"), &options);
/// assert_eq!(encoded, Value::from("~x"));
/// ```
#[must_use]
pub fn encode_symbols_with(value: &Value, options: &MarshalOptions) -> Value {
    encode_with_marker(value, options.symbol_marker)
}

/// Decodes symbols using the marker configured in `options`.
#[must_use]
pub fn decode_symbols_with(value: &Value, options: &MarshalOptions) -> Value {
    decode_with_marker(value, options.symbol_marker)
}

fn encode_with_marker(value: &Value, marker: char) -> Value {
    match value {
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), encode_with_marker(v, marker)))
                .collect(),
        ),
        Value::Document(doc) => {
            Value::Document(map_document(doc, |v| encode_with_marker(v, marker)))
        }
        Value::Array(arr) => {
            Value::Array(arr.iter().map(|v| encode_with_marker(v, marker)).collect())
        }
        Value::Symbol(name) => {
            let mut encoded = String::with_capacity(name.len() + marker.len_utf8());
            encoded.push(marker);
            encoded.push_str(name);
            Value::String(encoded)
        }
        other => other.clone(),
    }
}

fn decode_with_marker(value: &Value, marker: char) -> Value {
    match value {
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), decode_with_marker(v, marker)))
                .collect(),
        ),
        Value::Document(doc) => {
            Value::Document(map_document(doc, |v| decode_with_marker(v, marker)))
        }
        Value::Array(arr) => {
            Value::Array(arr.iter().map(|v| decode_with_marker(v, marker)).collect())
        }
        Value::String(s) => match s.strip_prefix(marker) {
            Some(name) => Value::Symbol(name.to_string()),
            None => Value::String(s.clone()),
        },
        other => other.clone(),
    }
}

fn map_document(doc: &Document, f: impl Fn(&Value) -> Value) -> Document {
    doc.iter().map(|(k, v)| (k.to_string(), f(v))).collect()
}
