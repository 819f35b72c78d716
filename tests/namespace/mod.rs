// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::Result;
use underline::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn zero(_args: &[Value]) -> Result<Value> {
    Ok(Value::from(0))
}

fn one(_args: &[Value]) -> Result<Value> {
    Ok(Value::from(1))
}

#[test]
fn builtins_are_complete() -> Result<()> {
    let expected = [
        "countObj",
        "equal",
        "keys",
        "prop",
        "propEquals",
        "propOwn",
        "propPath",
        "propPathType",
        "propPrototype",
        "propType",
        "serialize",
        "toFloat",
        "toInt",
        "toNumber",
        "type",
        "typeIn",
        "unserialize",
    ];
    assert_eq!(BUILTINS.names().collect::<Vec<_>>(), expected);
    assert_eq!(BUILTINS.len(), expected.len());
    Ok(())
}

#[test]
fn mixin_never_overwrites() -> Result<()> {
    init_logger();

    let mut ns = Namespace::new();
    assert!(ns.is_empty());
    assert!(ns.insert("a", zero as BuiltinFcn));

    let installed = ns.mixin([("a", one as BuiltinFcn), ("b", one as BuiltinFcn)]);
    assert_eq!(installed, 1);
    assert_eq!(ns.len(), 2);
    assert_eq!(ns.call("a", &[])?, Value::from(0));
    assert_eq!(ns.call("b", &[])?, Value::from(1));

    // Merging the same set again changes nothing.
    assert_eq!(ns.mixin([("b", zero as BuiltinFcn)]), 0);
    assert_eq!(ns.call("b", &[])?, Value::from(1));
    Ok(())
}

#[test]
fn mixin_into_builtins() -> Result<()> {
    init_logger();

    let mut ns = BUILTINS.clone();
    let installed = ns.mixin([
        ("toNumber".to_string(), zero as BuiltinFcn),
        ("zero".to_string(), zero as BuiltinFcn),
    ]);
    assert_eq!(installed, 1);
    assert_eq!(
        ns.call("toNumber", &[Value::from(2.5)])?,
        Value::from(3.0)
    );
    assert!(ns.contains("zero"));
    assert!(!BUILTINS.contains("zero"));
    Ok(())
}

#[test]
fn unknown_function() -> Result<()> {
    let err = match BUILTINS.call("missing", &[]) {
        Ok(v) => panic!("unexpected result {v:?}"),
        Err(e) => e,
    };
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::UnknownFunction("missing".to_string()))
    );
    assert!(BUILTINS.get("missing").is_none());
    assert!(BUILTINS.function("missing").is_none());
    Ok(())
}

#[test]
fn functions_as_values() -> Result<()> {
    let f = match BUILTINS.function("propPath") {
        Some(f) => f,
        None => panic!("propPath is not installed"),
    };
    assert_eq!(type_of(&f), TypeTag::Function);
    assert_eq!(f.to_js_string(), "function propPath() { [native code] }");

    let Value::Function(fcn) = &f else {
        panic!("not a function: {f:?}");
    };
    let config = Value::from_json_str(r#"{"a": {"b": 1}}"#)?;
    assert_eq!(fcn.call(&[config, Value::from("a.b")])?, Value::from(true));

    // A function value can be stored and inspected like any other property.
    let holder: Object = [("run", f.clone())].into_iter().collect();
    assert!(prop_type(&Value::from(holder), "run", "function"));
    Ok(())
}
