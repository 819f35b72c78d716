// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(clippy::as_conversions, clippy::cast_possible_truncation)]

use crate::error::Error;
use crate::types::{type_of, TypeTag};
use crate::value::Value;
use crate::Rc;

use log::debug;

/// Own enumerable keys: object fields in key order, array indices in order.
pub fn keys(value: &Value) -> Vec<Rc<str>> {
    match value {
        Value::Object(o) => o.fields().keys().cloned().collect(),
        Value::Array(a) => (0..a.len()).map(|idx| idx.to_string().into()).collect(),
        _ => vec![],
    }
}

/// Number of entries in a composite value.
///
/// An object that carries a non-negative integer `length` reports that
/// length instead of its key count.
pub fn count(value: &Value) -> usize {
    match value {
        Value::Array(a) => a.len(),
        Value::Object(o) => match o.get("length") {
            Some(Value::Number(n)) if *n >= 0.0 && n.fract() == 0.0 => *n as usize,
            _ => o.len(),
        },
        _ => 0,
    }
}

/// Encode `value` as JSON.
///
/// Returns `None` for values that have no JSON form at the top level
/// (`undefined` and functions).
pub fn serialize(value: &Value) -> Option<String> {
    if type_of(value) == TypeTag::Object && count(value) == 0 {
        return Some("{}".to_string());
    }
    match value {
        Value::Undefined | Value::Function(_) => None,
        _ => match serde_json::to_string(value) {
            Ok(s) => Some(s),
            Err(e) => {
                debug!("could not serialize {value:?}: {e}");
                None
            }
        },
    }
}

/// Decode JSON text. The string `[object Object]`, which is what a plain
/// object turns into when coerced to a string, decodes to an empty object.
pub fn unserialize(input: &str) -> Result<Value, Error> {
    if input == "[object Object]" {
        return Ok(Value::new_object());
    }
    serde_json::from_str(input).map_err(|e| {
        debug!("unserialize failed at line {} column {}: {e}", e.line(), e.column());
        Error::InvalidJson(e.to_string())
    })
}
