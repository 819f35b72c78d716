// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::Result;
use underline::*;

fn noop(_args: &[Value]) -> Result<Value> {
    Ok(Value::Undefined)
}

#[test]
fn empty_object_is_braces() -> Result<()> {
    assert_eq!(serialize(&Value::new_object()).as_deref(), Some("{}"));

    // Inherited keys do not count.
    let mut base = Object::new();
    base.insert("a", Value::from(1.0));
    let derived = Value::from(Object::with_prototype(base));
    assert_eq!(count(&derived), 0);
    assert_eq!(serialize(&derived).as_deref(), Some("{}"));
    Ok(())
}

#[test]
fn serialize_follows_json_rules() -> Result<()> {
    let mut obj = Object::new();
    obj.insert("n", Value::from(1.0));
    obj.insert("f", Value::from(1.5));
    obj.insert("s", Value::from("x\n"));
    obj.insert("skip", Value::Undefined);
    obj.insert("cb", Value::new_function("cb", noop));
    obj.insert("nan", Value::from(f64::NAN));
    obj.insert(
        "list",
        Value::from(vec![
            Value::Undefined,
            Value::new_function("cb", noop),
            Value::Null,
            Value::from(true),
        ]),
    );
    obj.insert("when", Value::new_date(0.0));
    obj.insert("re", Value::new_regexp("a+", "g"));
    obj.insert("err", Value::new_error("boom"));

    assert_eq!(
        serialize(&Value::from(obj)).as_deref(),
        Some(
            r#"{"err":{},"f":1.5,"list":[null,null,null,true],"n":1,"nan":null,"re":{},"s":"x\n","when":"1970-01-01T00:00:00.000Z"}"#
        )
    );
    Ok(())
}

#[test]
fn serialize_scalars() -> Result<()> {
    assert_eq!(serialize(&Value::from(2.0)).as_deref(), Some("2"));
    assert_eq!(serialize(&Value::from(-0.0)).as_deref(), Some("0"));
    assert_eq!(serialize(&Value::from("a")).as_deref(), Some(r#""a""#));
    assert_eq!(serialize(&Value::Null).as_deref(), Some("null"));
    assert_eq!(serialize(&Value::new_array()).as_deref(), Some("[]"));
    assert_eq!(serialize(&Value::new_date(f64::NAN)).as_deref(), Some("null"));
    assert_eq!(
        serialize(&Value::new_date(8.64e15)).as_deref(),
        Some(r#""+275760-09-13T00:00:00.000Z""#)
    );
    assert_eq!(serialize(&Value::Undefined), None);
    assert_eq!(serialize(&Value::new_function("f", noop)), None);
    Ok(())
}

#[test]
fn round_trip() -> Result<()> {
    let v = Value::from_json_str(
        r#"{"name": "widget", "sizes": [1, 2.5, -3], "nested": {"ok": true, "none": null}}"#,
    )?;
    let text = serialize(&v).unwrap_or_default();
    assert_eq!(unserialize(&text)?, v);
    Ok(())
}

#[test]
fn unserialize_special_cases() -> Result<()> {
    assert_eq!(unserialize("[object Object]")?, Value::new_object());
    assert_eq!(unserialize("[1]")?, Value::from(vec![Value::from(1.0)]));
    assert!(matches!(unserialize("{oops"), Err(Error::InvalidJson(_))));

    assert_eq!(BUILTINS.call("unserialize", &[Value::from(5.0)])?, Value::from(""));
    assert_eq!(BUILTINS.call("unserialize", &[])?, Value::from(""));
    assert!(BUILTINS.call("unserialize", &[Value::from("{oops")]).is_err());
    Ok(())
}

#[test]
fn keys_and_count() -> Result<()> {
    let v = Value::from_json_str(r#"{"b": 1, "a": 2}"#)?;
    let names: Vec<String> = keys(&v).iter().map(|k| k.to_string()).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(count(&v), 2);

    let arr = Value::from_json_str("[5, 6, 7]")?;
    assert_eq!(keys(&arr).len(), 3);
    assert_eq!(keys(&arr)[2].as_ref(), "2");
    assert_eq!(count(&arr), 3);

    let sized = Value::from_json_str(r#"{"length": 10, "x": 1}"#)?;
    assert_eq!(count(&sized), 10);
    let odd = Value::from_json_str(r#"{"length": 1.5}"#)?;
    assert_eq!(count(&odd), 1);

    assert!(keys(&Value::from("abc")).is_empty());
    assert_eq!(count(&Value::from("abc")), 0);
    assert_eq!(count(&Value::Null), 0);

    assert_eq!(
        BUILTINS.call("keys", &[v])?,
        Value::from(vec![Value::from("a"), Value::from("b")])
    );
    assert_eq!(BUILTINS.call("countObj", &[arr])?, Value::from(3));
    Ok(())
}
