// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(clippy::float_cmp)]

use crate::value::Value;

use core::fmt;

/// Tie-breaking rule applied when a scaled value lies exactly halfway
/// between two integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Away from zero.
    #[default]
    HalfUp,
    /// Toward zero.
    HalfDown,
    /// To the even neighbour.
    HalfEven,
    /// To the odd neighbour.
    HalfOdd,
}

impl RoundingMode {
    /// Select a mode by its exact name. Unknown names select `HALF_UP`.
    pub fn from_name(name: &str) -> RoundingMode {
        match name {
            "HALF_DOWN" => RoundingMode::HalfDown,
            "HALF_EVEN" => RoundingMode::HalfEven,
            "HALF_ODD" => RoundingMode::HalfOdd,
            _ => RoundingMode::HalfUp,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::HalfOdd => "HALF_ODD",
        }
    }

    // `floor` is the floor of a scaled value with a fractional part of
    // exactly one half; `sign` is the sign of that value.
    fn break_tie(self, floor: f64, sign: f64) -> f64 {
        match self {
            RoundingMode::HalfDown if sign < 0.0 => floor + 1.0,
            RoundingMode::HalfDown => floor,
            // The remainder keeps the sign of `floor`, so this always lands
            // on the even neighbour nearer to zero.
            RoundingMode::HalfEven => floor + (floor % 2.0) * sign,
            RoundingMode::HalfOdd if floor % 2.0 == 0.0 => floor + 1.0,
            RoundingMode::HalfOdd => floor,
            RoundingMode::HalfUp if sign > 0.0 => floor + 1.0,
            RoundingMode::HalfUp => floor,
        }
    }
}

impl From<Option<&str>> for RoundingMode {
    fn from(name: Option<&str>) -> Self {
        name.map(RoundingMode::from_name).unwrap_or_default()
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round `value`, converted to a number, to `precision` decimal digits.
///
/// A negative precision rounds to tens, hundreds and so on. `mode` only
/// matters when the scaled value is exactly halfway between two integers;
/// every other value rounds half away from zero. Values without a numeric
/// form produce NaN.
pub fn to_number(value: &Value, precision: i32, mode: RoundingMode) -> f64 {
    to_number_f64(value.to_number(), precision, mode)
}

pub fn to_number_f64(value: f64, precision: i32, mode: RoundingMode) -> f64 {
    let scale = 10f64.powf(f64::from(precision));
    let scaled = value * scale;

    let sign = if scaled > 0.0 {
        1.0
    } else if scaled < 0.0 {
        -1.0
    } else {
        0.0
    };

    // Zero and NaN have no sign and are never a tie.
    let is_half = sign != 0.0 && scaled % 1.0 == 0.5 * sign;
    let rounded = if is_half {
        mode.break_tie(scaled.floor(), sign)
    } else {
        scaled.round()
    };

    rounded / scale
}
