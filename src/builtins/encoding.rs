// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::builtins::utils::arg;
use crate::encoding;
use crate::namespace::Namespace;
use crate::value::Value;

use anyhow::Result;

pub fn register(m: &mut Namespace) {
    m.insert("countObj", count_obj);
    m.insert("keys", keys);
    m.insert("serialize", serialize);
    m.insert("unserialize", unserialize);
}

fn count_obj(args: &[Value]) -> Result<Value> {
    Ok(Value::from(encoding::count(arg(args, 0))))
}

fn keys(args: &[Value]) -> Result<Value> {
    let keys = encoding::keys(arg(args, 0))
        .into_iter()
        .map(Value::String)
        .collect::<Vec<_>>();
    Ok(Value::from(keys))
}

fn serialize(args: &[Value]) -> Result<Value> {
    Ok(match encoding::serialize(arg(args, 0)) {
        Some(s) => Value::from(s),
        None => Value::Undefined,
    })
}

fn unserialize(args: &[Value]) -> Result<Value> {
    match arg(args, 0) {
        Value::String(s) => Ok(encoding::unserialize(s)?),
        _ => Ok(Value::from("")),
    }
}
