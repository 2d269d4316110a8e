//! Forward conversion: field value → JSON value.
//!
//! Collections of mappable objects report [`Converted::Empty`] when they have
//! no elements, so the key is omitted from the output map.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use crate::config::MappingConfig;
use crate::cursor::{element_path, join_path};
use crate::error::Result;
use crate::field::Converted;
use crate::mappable::{encode_object, Mappable};

#[allow(clippy::ptr_arg)]
pub(crate) fn encode_string(s: &String) -> Converted<Value> {
    Converted::Present(Value::String(s.clone()))
}

pub(crate) fn encode_bool(b: &bool) -> Converted<Value> {
    Converted::Present(Value::Bool(*b))
}

pub(crate) fn encode_i64(i: &i64) -> Converted<Value> {
    Converted::Present(Value::from(*i))
}

pub(crate) fn encode_i32(i: &i32) -> Converted<Value> {
    Converted::Present(Value::from(*i))
}

/// NaN and infinities have no JSON representation.
pub(crate) fn encode_f64(f: &f64) -> Converted<Value> {
    match Number::from_f64(*f) {
        Some(n) => Converted::Present(Value::Number(n)),
        None => Converted::Mismatch("non-finite number"),
    }
}

pub(crate) fn encode_f32(f: &f32) -> Converted<Value> {
    encode_f64(&f64::from(*f))
}

pub(crate) fn encode_datetime(dt: &DateTime<Utc>) -> Converted<Value> {
    Converted::Present(Value::String(dt.to_rfc3339()))
}

pub(crate) fn encode_opaque_array(items: &[Value]) -> Converted<Value> {
    Converted::Present(Value::Array(items.to_vec()))
}

pub(crate) fn encode_opaque_map(map: &Map<String, Value>) -> Converted<Value> {
    Converted::Present(Value::Object(map.clone()))
}

/// Untyped subtree. `null` is treated as absent, mirroring decoding.
pub(crate) fn encode_opaque_value(value: &Value) -> Converted<Value> {
    match value {
        Value::Null => Converted::Empty,
        other => Converted::Present(other.clone()),
    }
}

pub(crate) fn encode_primitive_array<T>(
    items: &[T],
    encode: fn(&T) -> Converted<Value>,
) -> Converted<Value> {
    let mut elements = Vec::with_capacity(items.len());
    for item in items {
        match encode(item) {
            Converted::Present(element) => elements.push(element),
            Converted::Empty => {}
            Converted::Mismatch(actual) => return Converted::Mismatch(actual),
        }
    }
    Converted::Present(Value::Array(elements))
}

pub(crate) fn encode_primitive_dictionary<T>(
    entries: &HashMap<String, T>,
    encode: fn(&T) -> Converted<Value>,
) -> Converted<Value> {
    let mut elements = Map::new();
    for (key, item) in entries {
        match encode(item) {
            Converted::Present(element) => {
                elements.insert(key.clone(), element);
            }
            Converted::Empty => {}
            Converted::Mismatch(actual) => return Converted::Mismatch(actual),
        }
    }
    Converted::Present(Value::Object(elements))
}

/// Nested mappable object, encoded with its own cursor.
pub(crate) fn encode_nested<T: Mappable>(
    object: &mut T,
    config: &MappingConfig,
    path: String,
) -> Result<Converted<Value>> {
    Ok(Converted::Present(Value::Object(encode_object(
        object, config, path,
    )?)))
}

/// Array of mappable objects in sequence order; empty means absent.
pub(crate) fn encode_object_array<T: Mappable>(
    objects: &mut [T],
    config: &MappingConfig,
    path: String,
) -> Result<Converted<Value>> {
    if objects.is_empty() {
        return Ok(Converted::Empty);
    }
    let mut items = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter_mut().enumerate() {
        let values = encode_object(object, config, element_path(&path, index))?;
        items.push(Value::Object(values));
    }
    Ok(Converted::Present(Value::Array(items)))
}

/// String-keyed map of mappable objects; empty means absent.
pub(crate) fn encode_object_dictionary<T: Mappable>(
    objects: &mut HashMap<String, T>,
    config: &MappingConfig,
    path: String,
) -> Result<Converted<Value>> {
    if objects.is_empty() {
        return Ok(Converted::Empty);
    }
    let mut entries = Map::new();
    for (key, object) in objects.iter_mut() {
        let values = encode_object(object, config, join_path(&path, key))?;
        entries.insert(key.clone(), Value::Object(values));
    }
    Ok(Converted::Present(Value::Object(entries)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    #[test]
    fn test_scalar_conversion() {
        assert_eq!(encode_string(&"Doe".to_string()), Converted::Present(json!("Doe")));
        assert_eq!(encode_bool(&true), Converted::Present(json!(true)));
        assert_eq!(encode_i64(&100), Converted::Present(json!(100)));
        assert_eq!(encode_i32(&-7), Converted::Present(json!(-7)));
        assert_eq!(encode_f64(&40.0), Converted::Present(json!(40.0)));
    }

    #[test]
    fn test_float32_widening() {
        let Converted::Present(value) = encode_f32(&60.2f32) else {
            panic!("Expected number");
        };
        assert_eq!(value.as_f64().map(|f| f as f32), Some(60.2f32));
    }

    #[test]
    fn test_non_finite_float_is_mismatch() {
        assert_eq!(encode_f64(&f64::NAN), Converted::Mismatch("non-finite number"));
        assert_eq!(encode_f32(&f32::INFINITY), Converted::Mismatch("non-finite number"));
    }

    #[test]
    fn test_datetime_conversion() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        assert_eq!(
            encode_datetime(&dt),
            Converted::Present(json!("2024-06-15T12:30:00+00:00"))
        );
    }

    #[test]
    fn test_opaque_value_null_is_absent() {
        assert_eq!(encode_opaque_value(&Value::Null), Converted::Empty);
        assert_eq!(encode_opaque_value(&json!([1, "a"])), Converted::Present(json!([1, "a"])));
        assert_eq!(encode_opaque_array(&[]), Converted::Present(json!([])));
    }

    #[test]
    fn test_primitive_collections() {
        assert_eq!(
            encode_primitive_array(&["foo".to_string(), "bar".to_string()], encode_string),
            Converted::Present(json!(["foo", "bar"]))
        );
        assert_eq!(
            encode_primitive_array(&[1.0, f64::NAN], encode_f64),
            Converted::Mismatch("non-finite number")
        );

        let entries = HashMap::from([("foo".to_string(), "bar".to_string())]);
        assert_eq!(
            encode_primitive_dictionary(&entries, encode_string),
            Converted::Present(json!({"foo": "bar"}))
        );
    }
}
