//! Typed accessors over the untyped JSON tree.
//!
//! Every accessor narrows to one JSON type and reports a structural error
//! naming the full key path when the value has another type.

use serde_json::{Map, Value};

use crate::io::error::Error;

pub type Object = Map<String, Value>;

/// Returns the value under `key`, treating an explicit `null` as absent.
pub fn optional<'a>(object: &'a Object, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|v| !v.is_null())
}

pub fn require<'a>(object: &'a Object, key: &str, path: &'static str) -> Result<&'a Value, Error> {
    object.get(key).ok_or(Error::MissingKey(path))
}

pub fn as_object<'a>(value: &'a Value, path: &'static str) -> Result<&'a Object, Error> {
    value
        .as_object()
        .ok_or_else(|| Error::wrong_type(path, "object"))
}

pub fn as_array<'a>(value: &'a Value, path: &'static str) -> Result<&'a Vec<Value>, Error> {
    value
        .as_array()
        .ok_or_else(|| Error::wrong_type(path, "array"))
}

pub fn string<'a>(object: &'a Object, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// Reads an integral value, truncating JSON floats toward zero.
pub fn integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_u64().map(|v| v as i64))
        .or_else(|| value.as_f64().map(|v| v.trunc() as i64))
}

pub fn numbers(values: &[Value], path: &'static str) -> Result<Vec<f64>, Error> {
    values
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| Error::wrong_type(path, "array of numbers"))
        })
        .collect()
}

pub fn integers(values: &[Value], path: &'static str) -> Result<Vec<i64>, Error> {
    values
        .iter()
        .map(|v| integer(v).ok_or_else(|| Error::wrong_type(path, "array of numbers")))
        .collect()
}
