//! Error types for marshalling domain objects.
//!
//! ## Error Categories
//!
//! - **Registry Errors**: A type tag names a type nobody registered, or the tag
//!   itself is not a string
//! - **Field Errors**: A [`Marshal::set_field`](crate::Marshal::set_field)
//!   implementation received a value of the wrong shape
//! - **Serialization Errors**: JSON projection failures
//!
//! ## Examples
//!
//! ```rust
//! use object_marshal::{Error, TypeRegistry, value};
//!
//! let registry = TypeRegistry::new();
//! let tagged = value!({ "@classname": "Missing::Type" });
//! let err = registry
//!     .construct("Missing::Type", tagged.as_object().unwrap())
//!     .err()
//!     .unwrap();
//! assert!(matches!(err, Error::UnknownType(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while marshalling objects.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The type tag does not resolve to a registered type
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// The type tag key is present but does not hold a type name
    #[error("Invalid type tag: expected a type name, found {0}")]
    InvalidTypeTag(String),

    /// A field was handed a value it cannot hold
    #[error("Type mismatch for field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// JSON encoding failure
    #[error("JSON error: {0}")]
    Json(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unknown type error for an unregistered type tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_marshal::Error;
    ///
    /// let err = Error::unknown_type("ProjectHanlon::Node");
    /// assert!(err.to_string().contains("ProjectHanlon::Node"));
    /// ```
    pub fn unknown_type(name: &str) -> Self {
        Error::UnknownType(name.to_string())
    }

    /// Creates a type mismatch error for a field assignment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_marshal::Error;
    ///
    /// let err = Error::type_mismatch("@name", "string", "number");
    /// assert!(err.to_string().contains("expected string"));
    /// ```
    pub fn type_mismatch(field: &str, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_marshal::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_message() {
        let err = Error::unknown_type("Foo::Bar");
        assert_eq!(err.to_string(), "Unknown type: Foo::Bar");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::type_mismatch("age", "integer", "string");
        assert_eq!(
            err.to_string(),
            "Type mismatch for field 'age': expected integer, found string"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
