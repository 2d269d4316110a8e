//! jsonsz
//!
//! Declarative, bidirectional mapping between JSON and typed Rust objects.
//!
//! A domain type implements [`Mappable`] once, binding each of its fields to a
//! JSON key. The same declaration then drives both directions:
//!
//! - Decoding: JSON text or a parsed tree becomes a new instance
//! - Encoding: an instance becomes a JSON object, omitting absent fields
//!
//! Nested mappable types, arrays and string-keyed maps of them, primitive
//! scalars, dates, and untyped JSON passthrough fields are all supported.
//! Values of the wrong shape are skipped by default; see [`MappingConfig`].
//!
//! # Example
//!
//! ```rust
//! use jsonsz::{bind, Cursor, JsonSz, Mappable, Result};
//!
//! #[derive(Debug, Default)]
//! struct Address {
//!     street: Option<String>,
//!     po_box: Option<i64>,
//!     city: Option<String>,
//! }
//!
//! impl Mappable for Address {
//!     fn describe_mapping(&mut self, json: &mut Cursor<'_>) -> Result<()> {
//!         bind(&mut self.street, json.index("street"))?;
//!         bind(&mut self.po_box, json.index("poBox"))?;
//!         bind(&mut self.city, json.index("city"))?;
//!         Ok(())
//!     }
//! }
//!
//! let serializer = JsonSz::new();
//! let mut address: Address = serializer
//!     .decode_one(r#"{"street": "Buchanan Street", "poBox": 123, "city": "Glasgow"}"#)
//!     .unwrap();
//! assert_eq!(address.po_box, Some(123));
//!
//! address.street = None;
//! let json = serializer.encode_one(&mut address).unwrap();
//! assert!(!json.contains_key("street"));
//! ```

mod input;
mod serializer;

pub use input::JsonInput;
pub use serializer::JsonSz;

pub use jsonsz_core::{
    bind, element_path, join_path, json_kind, Bind, Binding, Converted, Cursor, Direction,
    ElementPolicy, JsonField, Mappable, MappingConfig, MappingError, MismatchPolicy, Result,
};

use serde_json::{Map, Value};

/// Decode a single object with the default configuration.
pub fn decode_one<'a, T: Mappable>(input: impl Into<JsonInput<'a>>) -> Result<T> {
    JsonSz::new().decode_one(input)
}

/// Decode an array of objects with the default configuration.
pub fn decode_many<'a, T: Mappable>(input: impl Into<JsonInput<'a>>) -> Result<Vec<T>> {
    JsonSz::new().decode_many(input)
}

/// Encode an object with the default configuration.
pub fn encode_one<T: Mappable>(object: &mut T) -> Result<Map<String, Value>> {
    JsonSz::new().encode_one(object)
}
