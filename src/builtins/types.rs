// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::builtins::utils::arg;
use crate::namespace::Namespace;
use crate::types::{type_in, type_of};
use crate::value::Value;

use anyhow::Result;

pub fn register(m: &mut Namespace) {
    m.insert("type", type_name);
    m.insert("typeIn", type_in_any);
}

fn type_name(args: &[Value]) -> Result<Value> {
    Ok(Value::from(type_of(arg(args, 0)).as_str()))
}

fn type_in_any(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(type_in(arg(args, 0), arg(args, 1))))
}
