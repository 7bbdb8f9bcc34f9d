//! Field extraction and population for domain objects.
//!
//! A domain object implements [`Marshal`] by listing its fields once, in
//! [`Marshal::fields`], and by accepting assignments in
//! [`Marshal::set_field`]. Everything else is provided:
//!
//! - [`Marshal::to_hash`] walks the fields into a [`Map`], nested objects
//!   included
//! - [`Marshal::from_hash`] assigns a mapping back, rebuilding nested objects
//!   whose mapping carries a type tag through a [`TypeRegistry`]
//! - [`Marshal::to_json`] renders a sorted JSON projection
//!
//! Internal fields (see [`is_internal`](crate::is_internal)) and logger
//! handles are never extracted, and internal keys are never assigned.
//!
//! ## Examples
//!
//! ```rust
//! use object_marshal::{Assigned, Field, Marshal, Result};
//!
//! #[derive(Default)]
//! struct Node {
//!     name: String,
//!     secret: String,
//! }
//!
//! impl Marshal for Node {
//!     fn fields(&self) -> Vec<(&str, Field<'_>)> {
//!         vec![
//!             ("name", Field::value(self.name.as_str())),
//!             ("_secret", Field::value(self.secret.as_str())),
//!         ]
//!     }
//!
//!     fn set_field(&mut self, name: &str, value: Assigned) -> Result<()> {
//!         if name == "name" {
//!             self.name = value.parse(name)?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let node = Node { name: "n1".into(), secret: "hidden".into() };
//! let hash = node.to_hash();
//! assert_eq!(hash.len(), 1);
//! assert_eq!(node.to_json().unwrap(), r#"{"name":"n1"}"#);
//! ```

use crate::document::{bson_ordered_hash_to_hash, OrderedDocument};
use crate::error::{Error, Result};
use crate::keys::is_internal;
use crate::{Map, MarshalOptions, TypeRegistry, Value};
use std::any::{type_name, Any};
use std::fmt;

/// Access to [`Any`] for trait objects, so rebuilt objects can be downcast.
///
/// Implemented for every `'static` type; never implement it by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// One registered field of a domain object, as seen by extraction.
pub enum Field<'a> {
    /// A scalar, or a mapping/array stored as is
    Value(Value),
    /// A nested domain object, extracted recursively
    Object(&'a dyn Marshal),
    /// A list whose object elements are extracted; other elements are copied
    List(Vec<Item<'a>>),
    /// A logging handle (a `tracing::Span`, say); never extracted
    Logger,
}

/// An element of a [`Field::List`].
pub enum Item<'a> {
    Value(Value),
    Object(&'a dyn Marshal),
}

impl<'a> Field<'a> {
    /// Wraps anything convertible into a [`Value`].
    pub fn value(value: impl Into<Value>) -> Self {
        Field::Value(value.into())
    }

    /// Wraps a nested domain object.
    pub fn object(object: &'a dyn Marshal) -> Self {
        Field::Object(object)
    }

    /// Wraps a slice of domain objects.
    pub fn objects<T: Marshal>(objects: &'a [T]) -> Self {
        Field::List(
            objects
                .iter()
                .map(|object| Item::Object(object as &dyn Marshal))
                .collect(),
        )
    }

    /// Wraps a list of plain values.
    pub fn values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Field::List(values.into_iter().map(|v| Item::Value(v.into())).collect())
    }
}

/// A value handed to [`Marshal::set_field`] by [`Marshal::from_hash`].
pub enum Assigned {
    /// The raw value from the mapping
    Value(Value),
    /// An object rebuilt from a mapping carrying a type tag
    Object(Box<dyn Marshal>),
}

impl Assigned {
    /// Returns the raw value, failing if an object was rebuilt instead.
    pub fn into_value(self, field: &str) -> Result<Value> {
        match self {
            Assigned::Value(value) => Ok(value),
            Assigned::Object(_) => Err(Error::type_mismatch(field, "value", "object")),
        }
    }

    /// Converts the raw value with its `TryFrom<Value>` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_marshal::{Assigned, Value};
    ///
    /// let cpus: i64 = Assigned::Value(Value::from(8)).parse("@cpus").unwrap();
    /// assert_eq!(cpus, 8);
    ///
    /// let err = Assigned::Value(Value::from("eight")).parse::<i64>("@cpus");
    /// assert!(err.is_err());
    /// ```
    pub fn parse<T>(self, field: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        let value = self.into_value(field)?;
        let found = value.kind();
        T::try_from(value).map_err(|_| Error::type_mismatch(field, type_name::<T>(), found))
    }

    /// Takes the rebuilt object out, downcast to its concrete type.
    pub fn into_object<T: Marshal>(self, field: &str) -> Result<T> {
        match self {
            Assigned::Object(object) => object
                .into_any()
                .downcast::<T>()
                .map(|object| *object)
                .map_err(|_| Error::type_mismatch(field, type_name::<T>(), "another object type")),
            Assigned::Value(value) => Err(Error::type_mismatch(
                field,
                type_name::<T>(),
                value.kind(),
            )),
        }
    }
}

impl fmt::Debug for Assigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assigned::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Assigned::Object(object) => f.debug_tuple("Object").field(object).finish(),
        }
    }
}

/// Shared conversion behavior for domain objects.
pub trait Marshal: AsAny {
    /// Lists the object's fields in a stable order.
    ///
    /// Names are emitted verbatim, sigil included. Internal names may be
    /// listed; extraction drops them.
    fn fields(&self) -> Vec<(&str, Field<'_>)>;

    /// Assigns one field. Called by [`Marshal::from_hash`] for every
    /// non-internal key; unknown names are the implementation's call.
    fn set_field(&mut self, name: &str, value: Assigned) -> Result<()>;

    /// Extracts every non-internal, non-logger field into a map.
    ///
    /// Nested objects become nested maps. In a list, object elements become
    /// maps and every other element, nested arrays included, is copied.
    fn to_hash(&self) -> Map {
        let mut hash = Map::new();
        for (name, field) in self.fields() {
            if is_internal(name) {
                continue;
            }
            let value = match field {
                Field::Logger => continue,
                Field::Value(value) => value,
                Field::Object(object) => Value::Object(object.to_hash()),
                Field::List(items) => Value::Array(
                    items
                        .into_iter()
                        .map(|item| match item {
                            Item::Value(value) => value,
                            Item::Object(object) => Value::Object(object.to_hash()),
                        })
                        .collect(),
                ),
            };
            hash.insert(name.to_string(), value);
        }
        hash
    }

    /// Assigns every non-internal entry of `hash` to the object.
    ///
    /// A mapping value (plain object or document) carrying the registry's
    /// type tag is rebuilt into an object of that type first; any other
    /// value is assigned raw. A tag holding `null` or `false` counts as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] when a tag is not registered,
    /// [`Error::InvalidTypeTag`] when it holds anything but a name, and
    /// whatever [`Marshal::set_field`] returns. Entries assigned before the
    /// failure stay assigned.
    fn from_hash(&mut self, hash: &dyn OrderedDocument, registry: &TypeRegistry) -> Result<()> {
        let type_tag = registry.options().type_tag.as_str();
        for (key, value) in hash.ordered_entries() {
            if is_internal(key) {
                tracing::trace!(key, "skipping internal key");
                continue;
            }
            let tag_name = match value.get(type_tag) {
                None | Some(Value::Null) | Some(Value::Bool(false)) => None,
                Some(Value::String(name)) | Some(Value::Symbol(name)) => Some(name.as_str()),
                Some(other) => return Err(Error::InvalidTypeTag(other.kind().to_string())),
            };
            let assigned = match tag_name {
                Some(tag_name) => {
                    let nested = match value {
                        Value::Document(doc) => bson_ordered_hash_to_hash(doc),
                        Value::Object(obj) => obj.clone(),
                        other => return Err(Error::InvalidTypeTag(other.kind().to_string())),
                    };
                    tracing::debug!(field = key, tag_name, "rebuilding nested object");
                    Assigned::Object(registry.construct(tag_name, &nested)?)
                }
                None => Assigned::Value(value.clone()),
            };
            self.set_field(key, assigned)?;
        }
        Ok(())
    }

    /// Renders [`Marshal::to_hash`] as compact JSON, keys sorted, `@noun` dropped.
    ///
    /// Only top-level keys are sorted; nested maps keep extraction order.
    fn to_json(&self) -> Result<String> {
        self.to_json_with_options(&MarshalOptions::default())
    }

    /// Like [`Marshal::to_json`], with the noun key and pretty printing
    /// taken from `options`.
    fn to_json_with_options(&self, options: &MarshalOptions) -> Result<String> {
        let mut hash = self.to_hash();
        hash.remove(&options.noun_key);
        hash.sort_keys();
        let projection = Value::Object(hash);
        let json = if options.pretty {
            serde_json::to_string_pretty(&projection)?
        } else {
            serde_json::to_string(&projection)?
        };
        Ok(json)
    }
}

impl dyn Marshal {
    /// Returns the concrete object if it is a `T`.
    pub fn downcast_ref<T: Marshal>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Marshal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.to_hash().iter()).finish()
    }
}

/// Builds a fresh `T` from a mapping, the way a registry factory does.
///
/// # Errors
///
/// Propagates any error raised by [`Marshal::from_hash`].
pub fn new_from_hash<T>(hash: &dyn OrderedDocument, registry: &TypeRegistry) -> Result<T>
where
    T: Marshal + Default,
{
    let mut object = T::default();
    object.from_hash(hash, registry)?;
    Ok(object)
}
