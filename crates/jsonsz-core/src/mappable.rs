//! The contract every mappable domain type implements.

use serde_json::{Map, Value};

use crate::config::MappingConfig;
use crate::cursor::Cursor;
use crate::error::Result;

/// A type whose fields map to the keys of a JSON object.
///
/// `Default` supplies the instance that decoding populates. The mapping
/// declaration is written once and runs in both directions: each field is
/// bound exactly once, in a fixed order, against the cursor indexed by its key.
///
/// Encoding borrows the instance mutably only because decoding and encoding
/// share this declaration; encoding never writes to the instance.
///
/// # Example
///
/// ```rust,ignore
/// use jsonsz::{bind, Cursor, Mappable, Result};
///
/// #[derive(Debug, Default)]
/// struct Address {
///     street: Option<String>,
///     city: Option<String>,
/// }
///
/// impl Mappable for Address {
///     fn describe_mapping(&mut self, json: &mut Cursor<'_>) -> Result<()> {
///         bind(&mut self.street, json.index("street"))?;
///         bind(&mut self.city, json.index("city"))?;
///         Ok(())
///     }
/// }
/// ```
pub trait Mappable: Default {
    /// Bind every mapped field against `json`.
    fn describe_mapping(&mut self, json: &mut Cursor<'_>) -> Result<()>;
}

/// Decode a fresh `T` from the object at `path`.
pub fn decode_object<T: Mappable>(
    values: &Map<String, Value>,
    config: &MappingConfig,
    path: String,
) -> Result<T> {
    let mut object = T::default();
    let mut cursor = Cursor::nested_decoding(values, config, path);
    object.describe_mapping(&mut cursor)?;
    Ok(object)
}

/// Encode `object` into a new JSON map for the object at `path`.
pub fn encode_object<T: Mappable>(
    object: &mut T,
    config: &MappingConfig,
    path: String,
) -> Result<Map<String, Value>> {
    let mut cursor = Cursor::nested_encoding(config, path);
    object.describe_mapping(&mut cursor)?;
    Ok(cursor.into_values())
}
