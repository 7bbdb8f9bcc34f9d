//! # object_marshal
//!
//! Shared conversion behavior for persisted domain objects.
//!
//! ## What It Does
//!
//! - **Field extraction**: [`Marshal::to_hash`] turns an object's registered
//!   fields into an ordered [`Map`], nested objects included
//! - **Tagged reconstruction**: [`Marshal::from_hash`] assigns a mapping back,
//!   rebuilding nested objects whose mapping names its type under
//!   `@classname`, through a [`TypeRegistry`]
//! - **Canonical JSON**: [`Marshal::to_json`] renders the extracted fields
//!   with top-level keys sorted and the `@noun` bookkeeping key dropped
//! - **Document normalization**: [`bson_ordered_hash_to_hash`] turns a
//!   store driver's ordered documents into plain maps
//! - **Symbol encoding**: [`encode_symbols_in_hash`] and
//!   [`decode_symbols_in_hash`] carry symbols through string-only formats
//! - **Odds and ends**: [`sanitize_hash`], [`exec_in_path`] and
//!   [`new_object_from_template_name`]
//!
//! Internal fields, whose name starts with `_` once the `@` sigil is
//! dropped, are never extracted and never overwritten.
//!
//! ## Quick Start
//!
//! ```rust
//! use object_marshal::{Assigned, Field, Marshal, Result, TypeRegistry};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Node {
//!     name: String,
//!     cpus: i64,
//! }
//!
//! impl Marshal for Node {
//!     fn fields(&self) -> Vec<(&str, Field<'_>)> {
//!         vec![
//!             ("@classname", Field::value("ProjectHanlon::Node")),
//!             ("@name", Field::value(self.name.as_str())),
//!             ("@cpus", Field::value(self.cpus)),
//!         ]
//!     }
//!
//!     fn set_field(&mut self, name: &str, value: Assigned) -> Result<()> {
//!         match name {
//!             "@name" => self.name = value.parse(name)?,
//!             "@cpus" => self.cpus = value.parse(name)?,
//!             _ => {}
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Node>("ProjectHanlon::Node");
//!
//! let node = Node { name: "node01".to_string(), cpus: 8 };
//! let hash = node.to_hash();
//!
//! let mut copy = Node::default();
//! copy.from_hash(&hash, &registry).unwrap();
//! assert_eq!(copy, node);
//!
//! assert_eq!(
//!     node.to_json().unwrap(),
//!     r#"{"@classname":"ProjectHanlon::Node","@cpus":8,"@name":"node01"}"#
//! );
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `debug` and `trace` level and never
//! installs a subscriber.

pub mod document;
pub mod error;
pub mod keys;
pub mod macros;
pub mod map;
pub mod marshal;
pub mod options;
pub mod path;
pub mod registry;
pub mod symbol;
pub mod template;
pub mod value;

pub use document::{
    bson_hash_array_to_hash_array, bson_ordered_hash_to_hash, Document, OrderedDocument,
};
pub use error::{Error, Result};
pub use keys::{is_internal, sanitize_hash, FIELD_SIGIL, INTERNAL_MARKER, NOUN_KEY, TYPE_TAG};
pub use map::Map;
pub use marshal::{new_from_hash, AsAny, Assigned, Field, Item, Marshal};
pub use options::MarshalOptions;
pub use path::{exec_in_path, exec_in_search_path};
pub use registry::{Factory, TypeRegistry};
pub use symbol::{
    decode_symbols_in_hash, decode_symbols_with, encode_symbols_in_hash, encode_symbols_with,
    SYMBOL_MARKER,
};
pub use template::{
    new_object_from_template_name, new_object_from_type_name, ChildTypes, Templated,
};
pub use value::{Number, Value};
