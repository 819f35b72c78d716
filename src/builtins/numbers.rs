// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::builtins::utils::{arg, as_str};
use crate::namespace::Namespace;
use crate::rounding::{self, RoundingMode};
use crate::value::Value;

use anyhow::Result;

pub fn register(m: &mut Namespace) {
    m.insert("toNumber", to_number);
}

fn to_number(args: &[Value]) -> Result<Value> {
    let precision = arg(args, 1).to_int32();
    let mode = RoundingMode::from(as_str(arg(args, 2)));
    Ok(Value::from(rounding::to_number(arg(args, 0), precision, mode)))
}
