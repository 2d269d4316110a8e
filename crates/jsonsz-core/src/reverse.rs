//! Reverse conversion: JSON value → field value.
//!
//! Every function here inspects the runtime shape of one JSON value and either
//! produces the field value or reports a mismatch. None of them mutate the
//! source tree.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::config::{ElementPolicy, MappingConfig};
use crate::cursor::{element_path, join_path};
use crate::error::{json_kind, Result};
use crate::field::Converted;
use crate::mappable::{decode_object, Mappable};

pub(crate) fn decode_string(value: &Value) -> Converted<String> {
    match value {
        Value::String(s) => Converted::Present(s.clone()),
        other => Converted::Mismatch(json_kind(other)),
    }
}

pub(crate) fn decode_bool(value: &Value) -> Converted<bool> {
    match value {
        Value::Bool(b) => Converted::Present(*b),
        other => Converted::Mismatch(json_kind(other)),
    }
}

/// Integers only; `40.5` and integers beyond `i64` are mismatches.
pub(crate) fn decode_i64(value: &Value) -> Converted<i64> {
    match value.as_i64() {
        Some(i) => Converted::Present(i),
        None => Converted::Mismatch(json_kind(value)),
    }
}

pub(crate) fn decode_i32(value: &Value) -> Converted<i32> {
    match value.as_i64().map(i32::try_from) {
        Some(Ok(i)) => Converted::Present(i),
        Some(Err(_)) => Converted::Mismatch("integer out of range"),
        None => Converted::Mismatch(json_kind(value)),
    }
}

/// Any JSON number.
pub(crate) fn decode_f64(value: &Value) -> Converted<f64> {
    match value.as_f64() {
        Some(f) => Converted::Present(f),
        None => Converted::Mismatch(json_kind(value)),
    }
}

/// Values that overflow `f32`, or are non-zero but round to zero, are out of range.
pub(crate) fn decode_f32(value: &Value) -> Converted<f32> {
    let Some(wide) = value.as_f64() else {
        return Converted::Mismatch(json_kind(value));
    };
    let narrow = wide as f32;
    if !narrow.is_finite() || (narrow == 0.0 && wide != 0.0) {
        return Converted::Mismatch("number out of range");
    }
    Converted::Present(narrow)
}

/// RFC 3339 text, normalized to UTC.
pub(crate) fn decode_datetime(value: &Value) -> Converted<DateTime<Utc>> {
    let Value::String(s) = value else {
        return Converted::Mismatch(json_kind(value));
    };
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Converted::Present(dt.with_timezone(&Utc)),
        Err(_) => Converted::Mismatch("non-RFC 3339 string"),
    }
}

/// Opaque array: copied verbatim, elements are not inspected.
pub(crate) fn decode_opaque_array(value: &Value) -> Converted<Vec<Value>> {
    match value {
        Value::Array(items) => Converted::Present(items.clone()),
        other => Converted::Mismatch(json_kind(other)),
    }
}

/// Opaque map: copied verbatim, entries are not inspected.
pub(crate) fn decode_opaque_map(value: &Value) -> Converted<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Converted::Present(map.clone()),
        other => Converted::Mismatch(json_kind(other)),
    }
}

/// Typed primitive array: every element must have the element type, otherwise
/// the whole field is a mismatch.
pub(crate) fn decode_primitive_array<T>(
    value: &Value,
    decode: fn(&Value) -> Converted<T>,
) -> Converted<Vec<T>> {
    let Value::Array(items) = value else {
        return Converted::Mismatch(json_kind(value));
    };
    let mut elements = Vec::with_capacity(items.len());
    for item in items {
        match decode(item) {
            Converted::Present(element) => elements.push(element),
            Converted::Empty => {}
            Converted::Mismatch(actual) => return Converted::Mismatch(actual),
        }
    }
    Converted::Present(elements)
}

/// Typed primitive map: every value must have the element type, otherwise the
/// whole field is a mismatch.
pub(crate) fn decode_primitive_dictionary<T>(
    value: &Value,
    decode: fn(&Value) -> Converted<T>,
) -> Converted<HashMap<String, T>> {
    let Value::Object(entries) = value else {
        return Converted::Mismatch(json_kind(value));
    };
    let mut elements = HashMap::with_capacity(entries.len());
    for (key, item) in entries {
        match decode(item) {
            Converted::Present(element) => {
                elements.insert(key.clone(), element);
            }
            Converted::Empty => {}
            Converted::Mismatch(actual) => return Converted::Mismatch(actual),
        }
    }
    Converted::Present(elements)
}

/// Nested mappable object, decoded with its own cursor.
pub(crate) fn decode_nested<T: Mappable>(
    value: &Value,
    config: &MappingConfig,
    path: String,
) -> Result<Converted<T>> {
    match value {
        Value::Object(values) => Ok(Converted::Present(decode_object(values, config, path)?)),
        other => Ok(Converted::Mismatch(json_kind(other))),
    }
}

/// Array of mappable objects, one fresh cursor per element, source order kept.
///
/// An empty result leaves the field unset.
pub(crate) fn decode_object_array<T: Mappable>(
    value: &Value,
    config: &MappingConfig,
    path: String,
) -> Result<Converted<Vec<T>>> {
    let Value::Array(items) = value else {
        return Ok(Converted::Mismatch(json_kind(value)));
    };

    let mut objects = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item_path = element_path(&path, index);
        match item {
            Value::Object(values) => objects.push(decode_object(values, config, item_path)?),
            other => {
                if let Some(mismatch) = malformed_element(config, &item_path, other) {
                    return Ok(mismatch);
                }
            }
        }
    }

    if objects.is_empty() {
        Ok(Converted::Empty)
    } else {
        Ok(Converted::Present(objects))
    }
}

/// String-keyed map of mappable objects, keys kept.
///
/// An empty result leaves the field unset.
pub(crate) fn decode_object_dictionary<T: Mappable>(
    value: &Value,
    config: &MappingConfig,
    path: String,
) -> Result<Converted<HashMap<String, T>>> {
    let Value::Object(entries) = value else {
        return Ok(Converted::Mismatch(json_kind(value)));
    };

    let mut objects = HashMap::with_capacity(entries.len());
    for (key, item) in entries {
        let item_path = join_path(&path, key);
        match item {
            Value::Object(values) => {
                objects.insert(key.clone(), decode_object(values, config, item_path)?);
            }
            other => {
                if let Some(mismatch) = malformed_element(config, &item_path, other) {
                    return Ok(mismatch);
                }
            }
        }
    }

    if objects.is_empty() {
        Ok(Converted::Empty)
    } else {
        Ok(Converted::Present(objects))
    }
}

/// Apply the element policy to a non-object element.
///
/// Returns the mismatch for the whole collection under
/// [`ElementPolicy::FailCollection`], or `None` when the element is dropped.
fn malformed_element<C>(config: &MappingConfig, path: &str, item: &Value) -> Option<Converted<C>> {
    let actual = json_kind(item);
    match config.on_malformed_element {
        ElementPolicy::SkipElement => {
            debug!(path = %path, actual, "Skipping collection element that is not an object");
            None
        }
        ElementPolicy::FailCollection => Some(Converted::Mismatch(actual)),
    }
}
