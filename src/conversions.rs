// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(clippy::as_conversions, clippy::cast_possible_truncation)]

use crate::number::{parse_float, parse_int, to_int32};
use crate::value::Value;

/// Convert `value` to an integer.
///
/// Booleans become 0 or 1 and finite numbers wrap to 32 bits. Strings are
/// parsed in `radix` (0 means 10) from their leading digits; a string
/// without digits gives `on_failure`, as does every other kind of value.
pub fn to_int(value: &Value, radix: i32, on_failure: i64) -> i64 {
    match value {
        Value::Bool(b) => i64::from(*b),
        Value::String(s) => {
            let radix = if radix == 0 { 10 } else { radix };
            match parse_int(s, radix) {
                n if n.is_finite() => n as i64,
                _ => on_failure,
            }
        }
        Value::Number(n) if n.is_finite() => i64::from(to_int32(*n)),
        _ => on_failure,
    }
}

/// Convert `value` to a float from the leading number of its string form.
/// Anything without one gives 0.
///
/// `to_float(&Value::from("-50 + 8"))` is `-50.0`.
pub fn to_float(value: &Value) -> f64 {
    let n = parse_float(&value.to_js_string());
    if n.is_nan() || n == 0.0 {
        0.0
    } else {
        n
    }
}
