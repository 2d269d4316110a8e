//! Top-level JSON input shapes accepted by the decode entry points.

use std::borrow::Cow;

use jsonsz_core::{json_kind, MappingError, Result};
use serde_json::{Map, Value};

/// JSON handed to a decode entry point: raw text or an already parsed tree.
#[derive(Debug, Clone, Copy)]
pub enum JsonInput<'a> {
    /// JSON text, parsed on use.
    Text(&'a str),

    /// A parsed value. A `Value::String` is treated as JSON text.
    Value(&'a Value),

    /// A parsed object.
    Object(&'a Map<String, Value>),
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        JsonInput::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        JsonInput::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for JsonInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => JsonInput::Text(text.as_str()),
            other => JsonInput::Value(other),
        }
    }
}

impl<'a> From<&'a Map<String, Value>> for JsonInput<'a> {
    fn from(object: &'a Map<String, Value>) -> Self {
        JsonInput::Object(object)
    }
}

impl<'a> JsonInput<'a> {
    /// Resolve the input to a single JSON object.
    pub(crate) fn into_object(self) -> Result<Cow<'a, Map<String, Value>>> {
        match self {
            JsonInput::Text(text) => match serde_json::from_str::<Value>(text)? {
                Value::Object(object) => Ok(Cow::Owned(object)),
                other => Err(unexpected("object", &other)),
            },
            JsonInput::Value(Value::Object(object)) => Ok(Cow::Borrowed(object)),
            JsonInput::Value(other) => Err(unexpected("object", other)),
            JsonInput::Object(object) => Ok(Cow::Borrowed(object)),
        }
    }

    /// Resolve the input to a list of JSON values.
    pub(crate) fn into_array(self) -> Result<Cow<'a, [Value]>> {
        match self {
            JsonInput::Text(text) => match serde_json::from_str::<Value>(text)? {
                Value::Array(items) => Ok(Cow::Owned(items)),
                other => Err(unexpected("array of objects", &other)),
            },
            JsonInput::Value(Value::Array(items)) => Ok(Cow::Borrowed(items.as_slice())),
            JsonInput::Value(other) => Err(unexpected("array of objects", other)),
            JsonInput::Object(_) => Err(MappingError::UnexpectedInput {
                expected: "array of objects",
                actual: "object",
            }),
        }
    }
}

fn unexpected(expected: &'static str, value: &Value) -> MappingError {
    MappingError::UnexpectedInput {
        expected,
        actual: json_kind(value),
    }
}
