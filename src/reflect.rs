// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::types::{type_in, type_of};
use crate::value::{PropertyKind, Value};
use crate::Rc;

use core::mem;

/// `key` resolves on `object`, directly or through its prototype chain.
/// Non-composite values have no properties.
pub fn prop(object: &Value, key: &str) -> bool {
    object.property_kind(key).is_some()
}

pub fn prop_own(object: &Value, key: &str) -> bool {
    object.property_kind(key) == Some(PropertyKind::Own)
}

/// `key` resolves on `object` only through inheritance.
pub fn prop_prototype(object: &Value, key: &str) -> bool {
    object.property_kind(key) == Some(PropertyKind::Inherited)
}

// Walk the dot separated `path` from `object`, stopping at the first
// segment that does not resolve.
fn resolve_path(object: &Value, path: &str) -> Option<Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = object.get_property(first)?;
    for segment in segments {
        current = current.get_property(segment)?;
    }
    Some(current)
}

/// Every segment of `path` resolves, starting at `object`.
///
/// # Example
///
/// ```ignore
/// prop_path(&config, "server.tls.cert");
/// ```
pub fn prop_path(object: &Value, path: &str) -> bool {
    resolve_path(object, path).is_some()
}

/// `path` resolves and the value at its end matches `types`, which is a tag
/// name or an array of tag names.
pub fn prop_path_type(object: &Value, path: &str, types: &Value) -> bool {
    resolve_path(object, path).is_some_and(|v| type_in(&v, types))
}

pub fn prop_type(object: &Value, key: &str, expected: &str) -> bool {
    object
        .get_property(key)
        .is_some_and(|v| type_of(&v).as_str() == expected)
}

pub fn prop_equals(object: &Value, key: &str, value: &Value, strict: bool) -> bool {
    object
        .get_property(key)
        .is_some_and(|v| equal(&v, value, strict))
}

/// Compare two values. Two NaNs are always equal.
///
/// Strict comparison requires the same type. Primitives then compare by
/// value and everything else by identity, so only a value and its clones
/// are strictly equal to an array, object, function, date, regexp or error.
///
/// Loose comparison lets `null` and `undefined` match each other. Two values
/// of the same kind compare strictly, as do two non-primitives. Otherwise
/// non-primitives are replaced by their string form, and the pair compares
/// as strings if both are strings and numerically if not.
pub fn equal(a: &Value, b: &Value, strict: bool) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if strict {
        return identical(a, b);
    }

    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        _ if mem::discriminant(a) == mem::discriminant(b) => identical(a, b),
        _ if !is_primitive(a) && !is_primitive(b) => false,
        _ => match (to_primitive(a), to_primitive(b)) {
            (Value::String(x), Value::String(y)) => x == y,
            (x, y) => x.to_number() == y.to_number(),
        },
    }
}

fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => Rc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
        (Value::Function(x), Value::Function(y)) => Rc::ptr_eq(x, y),
        (Value::Date(x), Value::Date(y)) => Rc::ptr_eq(x, y),
        (Value::RegExp(x), Value::RegExp(y)) => Rc::ptr_eq(x, y),
        (Value::Error(x), Value::Error(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

fn is_primitive(v: &Value) -> bool {
    matches!(
        v,
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

// Dates included, every non-primitive converts through its string form.
fn to_primitive(v: &Value) -> Value {
    if is_primitive(v) {
        v.clone()
    } else {
        Value::from(v.to_js_string())
    }
}
