//! Decode and encode entry points.

use jsonsz_core::{
    decode_object, element_path, encode_object, json_kind, Mappable, MappingConfig, MappingError,
    Result,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::input::JsonInput;

/// Converts between JSON and [`Mappable`] types under one [`MappingConfig`].
///
/// The serializer holds no state besides its configuration. Every call builds
/// its own cursors, so one serializer can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct JsonSz {
    config: MappingConfig,
}

impl JsonSz {
    /// Create a serializer with the lenient default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MappingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Decode a single object into a new `T`.
    ///
    /// Fails if `input` is not JSON text or a JSON object. Field-level
    /// mismatches follow the configured policy.
    pub fn decode_one<'a, T: Mappable>(&self, input: impl Into<JsonInput<'a>>) -> Result<T> {
        let values = input.into().into_object()?;
        debug!(keys = values.len(), "Decoding object");
        decode_object(&values, &self.config, String::new())
    }

    /// Decode a JSON array of objects into a `Vec<T>`, keeping source order.
    ///
    /// Every element must be an object. A single object, or an array holding
    /// anything else, fails the whole call before any element is decoded.
    pub fn decode_many<'a, T: Mappable>(&self, input: impl Into<JsonInput<'a>>) -> Result<Vec<T>> {
        let items = input.into().into_array()?;
        let mut objects = Vec::with_capacity(items.len());
        for item in items.iter() {
            match item {
                Value::Object(values) => objects.push(values),
                other => {
                    return Err(MappingError::UnexpectedInput {
                        expected: "array of objects",
                        actual: json_kind(other),
                    })
                }
            }
        }

        debug!(count = objects.len(), "Decoding array of objects");
        objects
            .into_iter()
            .enumerate()
            .map(|(index, values)| decode_object(values, &self.config, element_path("", index)))
            .collect()
    }

    /// Encode `object` into a JSON object.
    ///
    /// Absent optional fields are omitted. `object` is not modified.
    pub fn encode_one<T: Mappable>(&self, object: &mut T) -> Result<Map<String, Value>> {
        let values = encode_object(object, &self.config, String::new())?;
        debug!(keys = values.len(), "Encoded object");
        Ok(values)
    }

    /// Encode a sequence of objects into a JSON array, in sequence order.
    pub fn encode_many<T: Mappable>(&self, objects: &mut [T]) -> Result<Value> {
        let mut items = Vec::with_capacity(objects.len());
        for (index, object) in objects.iter_mut().enumerate() {
            let values = encode_object(object, &self.config, element_path("", index))?;
            items.push(Value::Object(values));
        }
        debug!(count = items.len(), "Encoded array of objects");
        Ok(Value::Array(items))
    }

    /// Encode `object` straight to JSON text.
    pub fn encode_to_string<T: Mappable>(&self, object: &mut T) -> Result<String> {
        let values = self.encode_one(object)?;
        Ok(serde_json::to_string(&values)?)
    }
}
