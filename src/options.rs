//! Configuration options for marshalling.
//!
//! [`MarshalOptions`] names the reserved keys and markers the conversions rely
//! on. The defaults match what persisted objects already carry, so most
//! callers never build one explicitly.
//!
//! ## Examples
//!
//! ```rust
//! use object_marshal::MarshalOptions;
//!
//! let options = MarshalOptions::new()
//!     .with_type_tag("@type")
//!     .with_pretty(true);
//! assert_eq!(options.type_tag, "@type");
//! assert_eq!(options.noun_key, "@noun");
//! ```

use crate::keys::{NOUN_KEY, TYPE_TAG};
use crate::symbol::SYMBOL_MARKER;

/// Configuration for field population, JSON projection and symbol encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct MarshalOptions {
    /// Key naming the concrete type of a nested object mapping
    pub type_tag: String,
    /// Bookkeeping key dropped from the JSON projection
    pub noun_key: String,
    /// Leading character of an encoded symbol
    pub symbol_marker: char,
    /// Pretty-print the JSON projection
    pub pretty: bool,
}

impl Default for MarshalOptions {
    fn default() -> Self {
        MarshalOptions {
            type_tag: TYPE_TAG.to_string(),
            noun_key: NOUN_KEY.to_string(),
            symbol_marker: SYMBOL_MARKER,
            pretty: false,
        }
    }
}

impl MarshalOptions {
    /// Creates default options (`@classname` tag, `@noun` key, `:` marker, compact JSON).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_marshal::MarshalOptions;
    ///
    /// let options = MarshalOptions::new();
    /// assert_eq!(options.type_tag, "@classname");
    /// assert_eq!(options.symbol_marker, ':');
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key that carries a nested object's type name.
    #[must_use]
    pub fn with_type_tag(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = type_tag.into();
        self
    }

    /// Sets the bookkeeping key removed by the JSON projection.
    #[must_use]
    pub fn with_noun_key(mut self, noun_key: impl Into<String>) -> Self {
        self.noun_key = noun_key.into();
        self
    }

    /// Sets the symbol marker character.
    #[must_use]
    pub fn with_symbol_marker(mut self, marker: char) -> Self {
        self.symbol_marker = marker;
        self
    }

    /// Enables or disables pretty-printed JSON.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reserved_keys() {
        let options = MarshalOptions::default();
        assert_eq!(options.type_tag, TYPE_TAG);
        assert_eq!(options.noun_key, NOUN_KEY);
        assert_eq!(options.symbol_marker, SYMBOL_MARKER);
        assert!(!options.pretty);
    }

    #[test]
    fn test_builder_chain() {
        let options = MarshalOptions::new()
            .with_type_tag("@type")
            .with_noun_key("@kind")
            .with_symbol_marker('~')
            .with_pretty(true);

        assert_eq!(options.type_tag, "@type");
        assert_eq!(options.noun_key, "@kind");
        assert_eq!(options.symbol_marker, '~');
        assert!(options.pretty);
        assert_ne!(options, MarshalOptions::default());
    }
}
