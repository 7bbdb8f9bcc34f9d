//! Type registry for tagged reconstruction.
//!
//! When [`Marshal::from_hash`](crate::Marshal::from_hash) meets a nested
//! mapping carrying a type tag, it asks the [`TypeRegistry`] to build an
//! object of that type. Types are registered explicitly at startup under the
//! name their mappings carry (usually a fully qualified name such as
//! `ProjectHanlon::Node`).
//!
//! ## Examples
//!
//! ```rust
//! use object_marshal::{Assigned, Field, Marshal, Result, TypeRegistry, value};
//!
//! #[derive(Default)]
//! struct Tag {
//!     label: String,
//! }
//!
//! impl Marshal for Tag {
//!     fn fields(&self) -> Vec<(&str, Field<'_>)> {
//!         vec![
//!             ("@classname", Field::value("ProjectHanlon::Tag")),
//!             ("@label", Field::value(self.label.as_str())),
//!         ]
//!     }
//!
//!     fn set_field(&mut self, name: &str, value: Assigned) -> Result<()> {
//!         if name == "@label" {
//!             self.label = value.parse(name)?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Tag>("ProjectHanlon::Tag");
//!
//! let hash = value!({ "@classname": "ProjectHanlon::Tag", "@label": "rack-4" });
//! let tag = registry.construct("ProjectHanlon::Tag", hash.as_object().unwrap()).unwrap();
//! assert_eq!(tag.downcast_ref::<Tag>().map(|t| t.label.as_str()), Some("rack-4"));
//! ```

use crate::error::{Error, Result};
use crate::marshal::{new_from_hash, Marshal};
use crate::{Map, MarshalOptions};
use std::collections::HashMap;
use std::fmt;

/// Builds an object of one registered type from its mapping.
pub type Factory = Box<dyn Fn(&Map, &TypeRegistry) -> Result<Box<dyn Marshal>> + Send + Sync>;

/// Maps type tags to factories.
pub struct TypeRegistry {
    factories: HashMap<String, Factory>,
    options: MarshalOptions,
}

impl TypeRegistry {
    /// Creates an empty registry with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(MarshalOptions::default())
    }

    /// Creates an empty registry whose reconstructions use `options`.
    #[must_use]
    pub fn with_options(options: MarshalOptions) -> Self {
        TypeRegistry {
            factories: HashMap::new(),
            options,
        }
    }

    /// Options applied by every `from_hash` that goes through this registry.
    #[must_use]
    pub fn options(&self) -> &MarshalOptions {
        &self.options
    }

    /// Registers `T` under `name`; instances start from `T::default()` and
    /// are filled with [`Marshal::from_hash`].
    ///
    /// Registering a name twice replaces the earlier factory.
    pub fn register<T>(&mut self, name: &str) -> &mut Self
    where
        T: Marshal + Default,
    {
        self.register_with(name, |hash, registry| {
            let object: T = new_from_hash(hash, registry)?;
            Ok(Box::new(object))
        })
    }

    /// Registers a custom factory under `name`.
    pub fn register_with<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn(&Map, &TypeRegistry) -> Result<Box<dyn Marshal>> + Send + Sync + 'static,
    {
        tracing::debug!(type_name = name, "registering type");
        if self
            .factories
            .insert(name.to_string(), Box::new(factory))
            .is_some()
        {
            tracing::warn!(type_name = name, "replaced an existing registration");
        }
        self
    }

    /// Returns `true` if a type is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered type names, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds an object of the type registered under `name` from `hash`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if nothing is registered under `name`,
    /// or the factory's own error.
    pub fn construct(&self, name: &str, hash: &Map) -> Result<Box<dyn Marshal>> {
        let factory = self.factories.get(name).ok_or_else(|| {
            tracing::debug!(type_name = name, "type tag did not resolve");
            Error::unknown_type(name)
        })?;
        factory(hash, self)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.type_names())
            .field("options", &self.options)
            .finish()
    }
}
