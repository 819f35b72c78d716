// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::builtins::utils::{arg, as_str, property_key};
use crate::namespace::Namespace;
use crate::reflect;
use crate::value::Value;

use anyhow::Result;

pub fn register(m: &mut Namespace) {
    m.insert("equal", equal);
    m.insert("prop", prop);
    m.insert("propEquals", prop_equals);
    m.insert("propOwn", prop_own);
    m.insert("propPath", prop_path);
    m.insert("propPathType", prop_path_type);
    m.insert("propPrototype", prop_prototype);
    m.insert("propType", prop_type);
}

fn prop(args: &[Value]) -> Result<Value> {
    let key = property_key(arg(args, 1));
    Ok(Value::Bool(reflect::prop(arg(args, 0), &key)))
}

fn prop_own(args: &[Value]) -> Result<Value> {
    let key = property_key(arg(args, 1));
    Ok(Value::Bool(reflect::prop_own(arg(args, 0), &key)))
}

fn prop_prototype(args: &[Value]) -> Result<Value> {
    let key = property_key(arg(args, 1));
    Ok(Value::Bool(reflect::prop_prototype(arg(args, 0), &key)))
}

fn prop_path(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(match as_str(arg(args, 1)) {
        Some(path) => reflect::prop_path(arg(args, 0), path),
        None => false,
    }))
}

fn prop_path_type(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(match as_str(arg(args, 1)) {
        Some(path) => reflect::prop_path_type(arg(args, 0), path, arg(args, 2)),
        None => false,
    }))
}

fn prop_type(args: &[Value]) -> Result<Value> {
    let key = property_key(arg(args, 1));
    Ok(Value::Bool(match as_str(arg(args, 2)) {
        Some(expected) => reflect::prop_type(arg(args, 0), &key, expected),
        None => false,
    }))
}

fn prop_equals(args: &[Value]) -> Result<Value> {
    let key = property_key(arg(args, 1));
    let strict = arg(args, 3).is_truthy();
    Ok(Value::Bool(reflect::prop_equals(
        arg(args, 0),
        &key,
        arg(args, 2),
        strict,
    )))
}

fn equal(args: &[Value]) -> Result<Value> {
    let strict = arg(args, 2).is_truthy();
    Ok(Value::Bool(reflect::equal(arg(args, 0), arg(args, 1), strict)))
}
