//! Field binding: moves one value between a field and a cursor position.
//!
//! [`bind`] is the only operation a [`Mappable`] declaration calls. The
//! declared Rust type of the field selects the category at compile time:
//!
//! | Field type | Category |
//! |---|---|
//! | `String`, `bool`, `i64`, `i32`, `f64`, `f32`, `DateTime<Utc>` | primitive scalar |
//! | `Vec<Value>`, `Map<String, Value>`, `Value` | untyped passthrough |
//! | `Vec<String>`, `Vec<bool>`, `Vec<i64>`, `Vec<i32>`, `Vec<f64>`, `Vec<f32>` | typed primitive array |
//! | `HashMap<String, String \| bool \| i64 \| i32 \| f64 \| f32>` | typed primitive map |
//! | `T: Mappable` | nested object |
//! | `Vec<T: Mappable>` | array of objects |
//! | `HashMap<String, T: Mappable>` | map of objects |
//!
//! Wrapping any of these in `Option` makes the field absent-tolerant: a
//! missing or mismatched key leaves `None`, and `None` is omitted on encode.
//! Without `Option` the field is required-with-default: it keeps its
//! `Default` value when the key is missing, and is always written on encode
//! unless the category reports itself empty.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::cursor::Binding;
use crate::direction::Direction;
use crate::error::Result;
use crate::mappable::Mappable;
use crate::{forward, reverse};

/// Outcome of converting one value in either direction.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted<T> {
    /// A value to assign (decoding) or write (encoding).
    Present(T),

    /// Nothing to assign or write; the field or key stays absent.
    Empty,

    /// The value has the wrong shape. Carries the actual shape's name.
    Mismatch(&'static str),
}

/// A field category: how one declared type converts to and from JSON.
pub trait JsonField: Sized {
    /// Name of the JSON shape this category accepts, used in diagnostics.
    const EXPECTED: &'static str;

    /// Convert the JSON value found under the field's key.
    fn decode_field(value: &Value, at: &Binding<'_>) -> Result<Converted<Self>>;

    /// Convert the field's value for writing under its key.
    fn encode_field(&mut self, at: &Binding<'_>) -> Result<Converted<Value>>;
}

/// A field slot that can be bound against a cursor position.
pub trait Bind {
    fn bind(&mut self, at: Binding<'_>) -> Result<()>;
}

/// Bind `field` against the cursor position `at`, in the cursor's direction.
///
/// ```rust,ignore
/// bind(&mut self.firstname, json.index("firstname"))?;
/// ```
pub fn bind<F: Bind + ?Sized>(field: &mut F, at: Binding<'_>) -> Result<()> {
    field.bind(at)
}

impl<T: JsonField> Bind for T {
    fn bind(&mut self, at: Binding<'_>) -> Result<()> {
        match at.direction() {
            Direction::Decoding => {
                if let Some(decoded) = decode_at::<T>(&at)? {
                    *self = decoded;
                }
                Ok(())
            }
            Direction::Encoding => encode_at(self, at),
        }
    }
}

impl<T: JsonField> Bind for Option<T> {
    fn bind(&mut self, at: Binding<'_>) -> Result<()> {
        match at.direction() {
            Direction::Decoding => {
                if let Some(decoded) = decode_at::<T>(&at)? {
                    *self = Some(decoded);
                }
                Ok(())
            }
            Direction::Encoding => match self {
                Some(field) => encode_at(field, at),
                None => Ok(()),
            },
        }
    }
}

fn decode_at<T: JsonField>(at: &Binding<'_>) -> Result<Option<T>> {
    let Some(value) = at.value() else {
        return Ok(None);
    };
    match T::decode_field(value, at)? {
        Converted::Present(decoded) => Ok(Some(decoded)),
        Converted::Empty => Ok(None),
        Converted::Mismatch(actual) => {
            at.mismatch(T::EXPECTED, actual)?;
            Ok(None)
        }
    }
}

fn encode_at<T: JsonField>(field: &mut T, at: Binding<'_>) -> Result<()> {
    match field.encode_field(&at)? {
        Converted::Present(value) => at.write(value),
        Converted::Empty => {}
        Converted::Mismatch(actual) => at.mismatch(T::EXPECTED, actual)?,
    }
    Ok(())
}

macro_rules! scalar_field {
    ($ty:ty, $expected:literal, $decode:path, $encode:path) => {
        impl JsonField for $ty {
            const EXPECTED: &'static str = $expected;

            fn decode_field(value: &Value, _at: &Binding<'_>) -> Result<Converted<Self>> {
                Ok($decode(value))
            }

            fn encode_field(&mut self, _at: &Binding<'_>) -> Result<Converted<Value>> {
                Ok($encode(self))
            }
        }
    };
}

scalar_field!(String, "string", reverse::decode_string, forward::encode_string);
scalar_field!(bool, "boolean", reverse::decode_bool, forward::encode_bool);
scalar_field!(i64, "integer", reverse::decode_i64, forward::encode_i64);
scalar_field!(i32, "32-bit integer", reverse::decode_i32, forward::encode_i32);
scalar_field!(f64, "number", reverse::decode_f64, forward::encode_f64);
scalar_field!(f32, "32-bit number", reverse::decode_f32, forward::encode_f32);
scalar_field!(
    DateTime<Utc>,
    "RFC 3339 date string",
    reverse::decode_datetime,
    forward::encode_datetime
);

macro_rules! primitive_collection_fields {
    ($($ty:ty => $array:literal, $dictionary:literal, $decode:path, $encode:path;)*) => {$(
        impl JsonField for Vec<$ty> {
            const EXPECTED: &'static str = $array;

            fn decode_field(value: &Value, _at: &Binding<'_>) -> Result<Converted<Self>> {
                Ok(reverse::decode_primitive_array(value, $decode))
            }

            fn encode_field(&mut self, _at: &Binding<'_>) -> Result<Converted<Value>> {
                Ok(forward::encode_primitive_array(self.as_slice(), $encode))
            }
        }

        impl JsonField for HashMap<String, $ty> {
            const EXPECTED: &'static str = $dictionary;

            fn decode_field(value: &Value, _at: &Binding<'_>) -> Result<Converted<Self>> {
                Ok(reverse::decode_primitive_dictionary(value, $decode))
            }

            fn encode_field(&mut self, _at: &Binding<'_>) -> Result<Converted<Value>> {
                Ok(forward::encode_primitive_dictionary(&*self, $encode))
            }
        }
    )*};
}

primitive_collection_fields! {
    String => "array of strings", "map of strings", reverse::decode_string, forward::encode_string;
    bool => "array of booleans", "map of booleans", reverse::decode_bool, forward::encode_bool;
    i64 => "array of integers", "map of integers", reverse::decode_i64, forward::encode_i64;
    i32 => "array of 32-bit integers", "map of 32-bit integers", reverse::decode_i32, forward::encode_i32;
    f64 => "array of numbers", "map of numbers", reverse::decode_f64, forward::encode_f64;
    f32 => "array of 32-bit numbers", "map of 32-bit numbers", reverse::decode_f32, forward::encode_f32;
}

impl JsonField for Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn decode_field(value: &Value, _at: &Binding<'_>) -> Result<Converted<Self>> {
        Ok(reverse::decode_opaque_array(value))
    }

    fn encode_field(&mut self, _at: &Binding<'_>) -> Result<Converted<Value>> {
        Ok(forward::encode_opaque_array(self))
    }
}

impl JsonField for Map<String, Value> {
    const EXPECTED: &'static str = "object";

    fn decode_field(value: &Value, _at: &Binding<'_>) -> Result<Converted<Self>> {
        Ok(reverse::decode_opaque_map(value))
    }

    fn encode_field(&mut self, _at: &Binding<'_>) -> Result<Converted<Value>> {
        Ok(forward::encode_opaque_map(self))
    }
}

impl JsonField for Value {
    const EXPECTED: &'static str = "any JSON value";

    fn decode_field(value: &Value, _at: &Binding<'_>) -> Result<Converted<Self>> {
        Ok(Converted::Present(value.clone()))
    }

    fn encode_field(&mut self, _at: &Binding<'_>) -> Result<Converted<Value>> {
        Ok(forward::encode_opaque_value(self))
    }
}

impl<T: Mappable> JsonField for T {
    const EXPECTED: &'static str = "object";

    fn decode_field(value: &Value, at: &Binding<'_>) -> Result<Converted<Self>> {
        reverse::decode_nested(value, at.config(), at.path())
    }

    fn encode_field(&mut self, at: &Binding<'_>) -> Result<Converted<Value>> {
        forward::encode_nested(self, at.config(), at.path())
    }
}

impl<T: Mappable> JsonField for Vec<T> {
    const EXPECTED: &'static str = "array of objects";

    fn decode_field(value: &Value, at: &Binding<'_>) -> Result<Converted<Self>> {
        reverse::decode_object_array(value, at.config(), at.path())
    }

    fn encode_field(&mut self, at: &Binding<'_>) -> Result<Converted<Value>> {
        forward::encode_object_array(self, at.config(), at.path())
    }
}

impl<T: Mappable> JsonField for HashMap<String, T> {
    const EXPECTED: &'static str = "map of objects";

    fn decode_field(value: &Value, at: &Binding<'_>) -> Result<Converted<Self>> {
        reverse::decode_object_dictionary(value, at.config(), at.path())
    }

    fn encode_field(&mut self, at: &Binding<'_>) -> Result<Converted<Value>> {
        forward::encode_object_dictionary(self, at.config(), at.path())
    }
}
