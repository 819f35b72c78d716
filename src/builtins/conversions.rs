// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(clippy::as_conversions, clippy::cast_possible_truncation)]

use crate::builtins::utils::arg;
use crate::conversions;
use crate::namespace::Namespace;
use crate::value::Value;

use anyhow::Result;

pub fn register(m: &mut Namespace) {
    m.insert("toFloat", to_float);
    m.insert("toInt", to_int);
}

fn to_int(args: &[Value]) -> Result<Value> {
    let radix = arg(args, 1).to_int32();
    let on_failure = match arg(args, 2) {
        Value::Undefined => 0,
        v => v.to_number() as i64,
    };
    Ok(Value::from(conversions::to_int(arg(args, 0), radix, on_failure)))
}

fn to_float(args: &[Value]) -> Result<Value> {
    Ok(Value::from(conversions::to_float(arg(args, 0))))
}
