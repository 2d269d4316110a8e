//! Binding cursor: the JSON side of one object level during a mapping pass.
//!
//! A [`Cursor`] wraps the string-keyed map of a single object. Indexing it by
//! key hands out a [`Binding`], a short-lived handle that carries the key, the
//! direction, and either the value found under the key (decoding) or the map
//! to write into (encoding). The handle mutably borrows the cursor, so only one
//! key can be addressed at a time.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::{MappingConfig, MismatchPolicy};
use crate::direction::Direction;
use crate::error::{MappingError, Result};

enum Values<'a> {
    Decoding(&'a Map<String, Value>),
    Encoding(Map<String, Value>),
}

/// Cursor over the JSON map of one object.
///
/// Decoding cursors borrow the source map and never modify it. Encoding
/// cursors own the map they build; take it with [`Cursor::into_values`].
/// Nested objects always get a fresh cursor of their own.
pub struct Cursor<'a> {
    values: Values<'a>,
    config: &'a MappingConfig,
    path: String,
}

impl<'a> Cursor<'a> {
    /// Create a root cursor that reads from `values`.
    pub fn decoding(values: &'a Map<String, Value>, config: &'a MappingConfig) -> Self {
        Self::nested_decoding(values, config, String::new())
    }

    /// Create a root cursor that builds a new map.
    pub fn encoding(config: &'a MappingConfig) -> Self {
        Self::nested_encoding(config, String::new())
    }

    /// Create a decoding cursor for an object found at `path`.
    pub fn nested_decoding(
        values: &'a Map<String, Value>,
        config: &'a MappingConfig,
        path: String,
    ) -> Self {
        trace!(path = %path, keys = values.len(), "Opening decoding cursor");
        Self {
            values: Values::Decoding(values),
            config,
            path,
        }
    }

    /// Create an encoding cursor for an object written at `path`.
    pub fn nested_encoding(config: &'a MappingConfig, path: String) -> Self {
        trace!(path = %path, "Opening encoding cursor");
        Self {
            values: Values::Encoding(Map::new()),
            config,
            path,
        }
    }

    pub fn direction(&self) -> Direction {
        match self.values {
            Values::Decoding(_) => Direction::Decoding,
            Values::Encoding(_) => Direction::Encoding,
        }
    }

    pub fn config(&self) -> &'a MappingConfig {
        self.config
    }

    /// Dotted path of the object this cursor walks; empty at the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Position the cursor at `key`.
    ///
    /// When decoding, a missing key and a JSON `null` both yield a binding
    /// without a value, which leaves the field untouched.
    pub fn index<'c>(&'c mut self, key: &'c str) -> Binding<'c> {
        let slot = match &mut self.values {
            Values::Decoding(values) => {
                Slot::Decoding(values.get(key).filter(|value| !value.is_null()))
            }
            Values::Encoding(values) => Slot::Encoding(values),
        };
        Binding {
            key,
            parent: &self.path,
            config: self.config,
            slot,
        }
    }

    /// The map accumulated so far.
    ///
    /// For a decoding cursor this is a copy of the source map.
    pub fn into_values(self) -> Map<String, Value> {
        match self.values {
            Values::Decoding(values) => values.clone(),
            Values::Encoding(values) => values,
        }
    }
}

enum Slot<'c> {
    Decoding(Option<&'c Value>),
    Encoding(&'c mut Map<String, Value>),
}

/// A cursor positioned at one key, consumed by a single field bind.
pub struct Binding<'c> {
    key: &'c str,
    parent: &'c str,
    config: &'c MappingConfig,
    slot: Slot<'c>,
}

impl<'c> Binding<'c> {
    pub fn key(&self) -> &'c str {
        self.key
    }

    /// Full dotted path of the bound field, e.g. `contributors[1].address`.
    pub fn path(&self) -> String {
        join_path(self.parent, self.key)
    }

    pub fn direction(&self) -> Direction {
        match self.slot {
            Slot::Decoding(_) => Direction::Decoding,
            Slot::Encoding(_) => Direction::Encoding,
        }
    }

    pub fn config(&self) -> &'c MappingConfig {
        self.config
    }

    /// The JSON value under the key. Always `None` while encoding.
    pub fn value(&self) -> Option<&'c Value> {
        match self.slot {
            Slot::Decoding(value) => value,
            Slot::Encoding(_) => None,
        }
    }

    /// Write `value` under the key. Ignored while decoding.
    pub fn write(self, value: Value) {
        match self.slot {
            Slot::Encoding(values) => {
                values.insert(self.key.to_string(), value);
            }
            Slot::Decoding(_) => {
                debug!(key = self.key, "Ignoring write on a decoding binding");
            }
        }
    }

    /// Apply the configured mismatch policy to this field.
    ///
    /// Returns `Ok(())` when the field should simply be left unset.
    pub fn mismatch(&self, expected: &'static str, actual: &'static str) -> Result<()> {
        report_mismatch(self.config, self.path(), expected, actual)
    }
}

/// Apply the configured mismatch policy to the value found at `path`.
pub fn report_mismatch(
    config: &MappingConfig,
    path: String,
    expected: &'static str,
    actual: &'static str,
) -> Result<()> {
    match config.on_type_mismatch {
        MismatchPolicy::Skip => {
            debug!(path = %path, expected, actual, "Type mismatch, leaving field unset");
            Ok(())
        }
        MismatchPolicy::Fail => Err(MappingError::TypeMismatch {
            path,
            expected,
            actual,
        }),
    }
}

/// Join an object path and a key with a dot, omitting the dot at the root.
pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Path of the element at `index` inside the array at `path`.
pub fn element_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}
