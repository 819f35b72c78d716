// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::Result;
use underline::*;

#[test]
fn serialize_number() -> Result<()> {
    // Check that integer values are serialized without fractional part
    assert_eq!(serde_json::to_string_pretty(&Value::from(1.0))?, "1");
    assert_eq!(serde_json::to_string_pretty(&Value::from(-1.0))?, "-1");

    // Ensure that fractional parts are also serialized.
    assert_eq!(serde_json::to_string_pretty(&Value::from(1.1))?, "1.1");
    assert_eq!(serde_json::to_string_pretty(&Value::from(-1.1))?, "-1.1");

    // Non finite numbers have no JSON form.
    assert_eq!(serde_json::to_string(&Value::from(f64::INFINITY))?, "null");
    Ok(())
}

#[test]
fn serialize_string() -> Result<()> {
    assert_eq!(
        Value::String("Hello, World\n".into()).to_json_str()?,
        "\"Hello, World\\n\""
    );
    Ok(())
}

#[test]
fn constructors() -> Result<()> {
    assert_eq!(Value::new_object(), Value::from_json_str("{}")?);
    assert!(Value::new_array().as_array()?.is_empty());
    assert!(Value::new_object().is_empty_object());

    assert_eq!(Value::new_date(1.9).to_number(), 1.0);
    assert!(Value::new_date(f64::INFINITY).to_number().is_nan());
    assert!(Value::new_date(8.64e15 + 1.0).to_number().is_nan());
    assert!(Value::new_date(-0.5).to_number().is_sign_positive());
    assert_eq!(
        Value::from_array(vec![Value::Null]),
        Value::from_json_str("[null]")?
    );

    let Value::Error(e) = Value::new_error("boom") else {
        panic!("not an error");
    };
    assert_eq!(e.name.as_ref(), "Error");
    assert_eq!(e.message.as_ref(), "boom");
    Ok(())
}

#[test]
fn deserialize_numbers() -> Result<()> {
    let v = Value::from_json_str("[1, -2, 3.5, 18446744073709551615]")?;
    assert_eq!(v[0], Value::from(1.0));
    assert_eq!(v[1], Value::from(-2.0));
    assert_eq!(v[2], Value::from(3.5));
    assert_eq!(v[3], Value::from(u64::MAX));
    Ok(())
}

#[test]
fn usize_as_index() -> Result<()> {
    let mut item = Value::new_array();
    item.as_array_mut()?.push(Value::from(3.0));
    item.as_array_mut()?.push(Value::from(4.0));
    item.as_array_mut()?.push(Value::from(5.0));

    // Check case of item present.
    assert_eq!(&Value::from_json_str("[1, 2, [3, 4, 5]]")?[2], &item);

    // Check case of item not present.
    assert_eq!(
        &Value::from_json_str("[1, 2, [3, 4, 5]]")?[5],
        &Value::Undefined
    );

    // Check case of non indexable item.
    assert_eq!(&Value::Undefined[0], &Value::Undefined);
    assert_eq!(&Value::Null[0], &Value::Undefined);
    assert_eq!(&Value::Bool(true)[0], &Value::Undefined);
    assert_eq!(&Value::String("Hello".into())[0], &Value::Undefined);
    assert_eq!(&Value::new_object()[0], &Value::Undefined);
    Ok(())
}

#[test]
fn string_as_index() -> Result<()> {
    let obj = Value::from_json_str(r#"{ "a" : 5, "b" : 6 }"#)?;
    assert_eq!(&obj["a"], &Value::from(5.0));
    assert_eq!(&obj["c"], &Value::Undefined);

    let arr = Value::from_json_str("[7, 8]")?;
    assert_eq!(&arr["1"], &Value::from(8.0));
    assert_eq!(&arr["01"], &Value::Undefined);
    Ok(())
}

#[test]
fn api() -> Result<()> {
    let v = Value::from(std::f64::consts::PI);
    assert!(v.as_number().is_ok());
    assert!(v.as_bool().is_err());
    assert!(v.as_string().is_err());
    assert!(v.as_array().is_err());
    assert!(v.as_object().is_err());
    assert!(Value::from("x").as_number().is_err());
    assert_eq!(Value::from("x").as_string()?.as_ref(), "x");
    assert!(Value::Null.is_null());
    assert!(Value::Undefined.is_undefined());
    Ok(())
}

#[test]
fn inherited_fields() -> Result<()> {
    let mut base = Object::new();
    base.insert("shared", Value::from(1.0));
    base.insert("shadowed", Value::from(2.0));

    let mut derived = Object::with_prototype(base);
    derived.insert("shadowed", Value::from(3.0));
    derived.insert("local", Value::from(4.0));

    assert_eq!(derived.len(), 2);
    assert_eq!(
        derived.prototype().map(|p| p.get_own("shared")),
        Some(Some(&Value::from(1.0)))
    );
    assert_eq!(derived.get("shared"), Some(&Value::from(1.0)));
    assert_eq!(derived.get("shadowed"), Some(&Value::from(3.0)));
    assert_eq!(derived.get_own("shared"), None);
    assert_eq!(derived.property_kind("shared"), Some(PropertyKind::Inherited));
    assert_eq!(derived.property_kind("local"), Some(PropertyKind::Own));
    assert_eq!(derived.property_kind("other"), None);

    derived.set_prototype(None);
    assert!(derived.prototype().is_none());
    assert!(!derived.contains("shared"));
    Ok(())
}

#[test]
fn js_strings() -> Result<()> {
    let cases = [
        (Value::Undefined, "undefined"),
        (Value::Null, "null"),
        (Value::from(true), "true"),
        (Value::from(0.1), "0.1"),
        (Value::from(1e21), "1e+21"),
        (Value::from(123456789012.0), "123456789012"),
        (Value::from(1e-7), "1e-7"),
        (Value::from(f64::NEG_INFINITY), "-Infinity"),
        (Value::from_json_str("[1, null, [2, 3]]")?, "1,,2,3"),
        (Value::new_object(), "[object Object]"),
        (Value::new_regexp("a+b", "gi"), "/a+b/gi"),
        (Value::new_error("boom"), "Error: boom"),
        (Value::new_date(0.0), "Thu Jan 01 1970 00:00:00 GMT+0000 (Coordinated Universal Time)"),
        (Value::new_date(f64::NAN), "Invalid Date"),
    ];
    for (v, s) in cases {
        assert_eq!(v.to_js_string(), s);
        assert_eq!(v.to_string(), s);
    }
    Ok(())
}

#[test]
fn coercions() -> Result<()> {
    assert_eq!(Value::from(" 12 ").to_number(), 12.0);
    assert_eq!(Value::from("").to_number(), 0.0);
    assert_eq!(Value::from("0x10").to_number(), 16.0);
    assert!(Value::from("12px").to_number().is_nan());
    assert!(Value::Undefined.to_number().is_nan());
    assert_eq!(Value::Null.to_number(), 0.0);
    assert_eq!(Value::from(true).to_number(), 1.0);
    assert_eq!(Value::from_json_str("[5]")?.to_number(), 5.0);
    assert!(Value::from_json_str("[5, 6]")?.to_number().is_nan());
    assert!(Value::new_object().to_number().is_nan());
    assert_eq!(Value::new_date(86_400_000.0).to_number(), 86_400_000.0);

    assert!(!Value::from(f64::NAN).is_truthy());
    assert!(!Value::from("").is_truthy());
    assert!(Value::from("0").is_truthy());
    assert!(Value::new_array().is_truthy());
    Ok(())
}

#[test]
fn dates() -> Result<()> {
    let iso = |t: f64| match Value::new_date(t) {
        Value::Date(d) => d.to_iso_string(),
        v => panic!("not a date: {v:?}"),
    };
    assert_eq!(iso(0.0).as_deref(), Some("1970-01-01T00:00:00.000Z"));
    assert_eq!(iso(-1.0).as_deref(), Some("1969-12-31T23:59:59.999Z"));
    assert_eq!(iso(1_700_000_000_123.0).as_deref(), Some("2023-11-14T22:13:20.123Z"));

    // The full range is valid, with six digit years past 9999 and before 0.
    assert_eq!(iso(8.64e15).as_deref(), Some("+275760-09-13T00:00:00.000Z"));
    assert_eq!(iso(-8.64e15).as_deref(), Some("-271821-04-20T00:00:00.000Z"));
    assert_eq!(iso(-62_198_755_200_000.0).as_deref(), Some("-000001-01-01T00:00:00.000Z"));
    assert_eq!(iso(253_402_300_800_000.0).as_deref(), Some("+010000-01-01T00:00:00.000Z"));
    assert_eq!(iso(f64::NAN), None);

    assert_eq!(
        Value::new_date(8.64e15).to_js_string(),
        "Sat Sep 13 275760 00:00:00 GMT+0000 (Coordinated Universal Time)"
    );
    assert_eq!(
        Value::new_date(-62_198_755_200_000.0).to_js_string(),
        "Fri Jan 01 -0001 00:00:00 GMT+0000 (Coordinated Universal Time)"
    );

    let Some(dt) = chrono::DateTime::from_timestamp_millis(86_400_000) else {
        panic!("timestamp out of range");
    };
    let v = Value::from_datetime(dt);
    assert_eq!(v.to_number(), 86_400_000.0);
    assert_eq!(serde_json::to_string(&v)?, r#""1970-01-02T00:00:00.000Z""#);

    match (Value::new_date(1.9), Value::new_date(f64::NAN)) {
        (Value::Date(valid), Value::Date(invalid)) => {
            assert!(valid.is_valid() && valid.time() == 1.0);
            assert!(!invalid.is_valid() && invalid.time().is_nan());
        }
        other => panic!("not dates: {other:?}"),
    }
    Ok(())
}
