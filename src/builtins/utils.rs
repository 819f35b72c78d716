// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::value::Value;

pub fn arg(args: &[Value], idx: usize) -> &Value {
    args.get(idx).unwrap_or(&Value::Undefined)
}

/// The key that `v` names when used to look up a property.
pub fn property_key(v: &Value) -> String {
    match v {
        Value::String(s) => s.to_string(),
        _ => v.to_js_string(),
    }
}

pub fn as_str(v: &Value) -> Option<&str> {
    match v {
        Value::String(s) => Some(s.as_ref()),
        _ => None,
    }
}
