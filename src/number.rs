// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(
    clippy::float_cmp,
    clippy::as_conversions,
    clippy::cast_possible_truncation
)]

//! Number formatting and parsing with the host language's string rules.

const TWO_32: f64 = 4_294_967_296.0;
const TWO_31: f64 = 2_147_483_648.0;

fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn trim(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

fn trim_start(s: &str) -> &str {
    s.trim_start_matches(is_whitespace)
}

/// Wrap `n` into the signed 32-bit range. Non-finite values become 0.
pub fn to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(TWO_32);
    if wrapped >= TWO_31 {
        (wrapped - TWO_32) as i32
    } else {
        wrapped as i32
    }
}

/// Shortest string that reads back as `n`.
///
/// Plain decimal notation is used while the decimal exponent lies within
/// `-7 < exponent < 21`, scientific notation (`1e+21`, `1.5e-7`) outside it.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n < 0.0 {
        return format!("-{}", number_to_string(-n));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e3`.
    let sci = format!("{n:e}");
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let exp = (n - 1).abs();
        match digits.split_at(1) {
            (d, "") => format!("{d}e{sign}{exp}"),
            (d, rest) => format!("{d}.{rest}e{sign}{exp}"),
        }
    }
}

/// Length of the longest prefix of `s` that is a decimal literal,
/// `Infinity` included. Zero when there is none.
fn decimal_literal_len(s: &str) -> usize {
    let s = s.as_bytes();
    let mut i = 0;
    if matches!(s.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with(b"Infinity") {
        return i + "Infinity".len();
    }

    let int_start = i;
    while i < s.len() && s[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < s.len() && s[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < s.len() && s[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }

    if i < s.len() && matches!(s[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(s.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < s.len() && s[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

fn parse_decimal_literal(literal: &str) -> f64 {
    match literal.strip_suffix("Infinity") {
        Some("-") => f64::NEG_INFINITY,
        Some(_) => f64::INFINITY,
        None => literal.parse().unwrap_or(f64::NAN),
    }
}

fn parse_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    // Base 10 goes through the correctly rounded float parser.
    if radix == 10 {
        return digits.parse().ok();
    }
    let mut value = 0.0;
    for c in digits.chars() {
        value = value * f64::from(radix) + f64::from(c.to_digit(radix)?);
    }
    Some(value)
}

/// Numeric value of a whole string. Surrounding whitespace is ignored, the
/// empty string is 0 and anything malformed is NaN.
pub fn string_to_number(s: &str) -> f64 {
    let s = trim(s);
    if s.is_empty() {
        return 0.0;
    }

    let prefixed = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = prefixed {
        return parse_digits(&s[2..], radix).unwrap_or(f64::NAN);
    }

    if decimal_literal_len(s) == s.len() {
        parse_decimal_literal(s)
    } else {
        f64::NAN
    }
}

/// Parse the longest decimal prefix of `s` after leading whitespace.
pub fn parse_float(s: &str) -> f64 {
    let s = trim_start(s);
    match decimal_literal_len(s) {
        0 => f64::NAN,
        len => parse_decimal_literal(&s[..len]),
    }
}

/// Parse the longest run of `radix` digits at the start of `s`.
///
/// A radix of 0 means 10, or 16 when the digits carry a `0x` prefix. Any
/// other radix outside `2..=36` gives NaN, as does a missing digit run.
pub fn parse_int(s: &str, radix: i32) -> f64 {
    let s = trim_start(s);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut strip_prefix = true;
    let mut radix = match radix {
        0 => 10,
        2..=36 => {
            strip_prefix = radix == 16;
            radix as u32
        }
        _ => return f64::NAN,
    };

    let mut s = s;
    if strip_prefix && matches!(s.get(..2), Some("0x" | "0X")) {
        s = &s[2..];
        radix = 16;
    }

    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(s.len(), |(idx, _)| idx);

    match parse_digits(&s[..end], radix) {
        Some(v) if negative => -v,
        Some(v) => v,
        None => f64::NAN,
    }
}
