// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::namespace::BuiltinFcn;
use crate::number::{number_to_string, string_to_number, to_int32};
use crate::Rc;

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;
use std::ops;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, Utc};
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// Largest magnitude of a valid date time value, in milliseconds.
const MAX_TIME_VALUE: f64 = 8.64e15;

// The Gregorian calendar, weekdays included, repeats every 400 years.
const ERA_MS: i64 = 146_097 * 86_400_000;
const ERA_YEARS: i64 = 400;

/// A dynamically typed value.
///
/// Composite values share their storage, so cloning a value is cheap and
/// never copies the underlying array or object.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // Indicate that a value is undefined
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Array(Rc<Vec<Value>>),
    Object(Rc<Object>),
    Function(Rc<Function>),

    Date(Rc<DateValue>),
    RegExp(Rc<RegExp>),
    Error(Rc<ErrorValue>),
}

/// Whether a key was found directly on a value or through its prototype chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Own,
    Inherited,
}

/// A keyed container with an optional prototype.
///
/// Lookups that miss the own fields continue into the prototype, and from
/// there up the chain. Prototypes are shared and immutable, so a chain is
/// always finite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    fields: BTreeMap<Rc<str>, Value>,
    prototype: Option<Rc<Object>>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prototype(prototype: impl Into<Rc<Object>>) -> Self {
        Self {
            fields: BTreeMap::new(),
            prototype: Some(prototype.into()),
        }
    }

    pub fn insert(&mut self, key: impl Into<Rc<str>>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn prototype(&self) -> Option<&Rc<Object>> {
        self.prototype.as_ref()
    }

    pub fn set_prototype(&mut self, prototype: Option<Rc<Object>>) {
        self.prototype = prototype;
    }

    /// Own fields, ordered by key.
    pub fn fields(&self) -> &BTreeMap<Rc<str>, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_own(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Look up `key` on this object, then along the prototype chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut current = Some(self);
        while let Some(object) = current {
            if let Some(v) = object.fields.get(key) {
                return Some(v);
            }
            current = object.prototype.as_deref();
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn property_kind(&self, key: &str) -> Option<PropertyKind> {
        if self.contains_own(key) {
            Some(PropertyKind::Own)
        } else if self.prototype.as_ref().is_some_and(|p| p.contains(key)) {
            Some(PropertyKind::Inherited)
        } else {
            None
        }
    }
}

impl<K: Into<Rc<str>>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            prototype: None,
        }
    }
}

/// A named callable value.
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    fcn: BuiltinFcn,
}

impl Function {
    pub fn new(name: impl Into<Rc<str>>, fcn: BuiltinFcn) -> Self {
        Self {
            name: name.into(),
            fcn,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.fcn)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// Functions compare by identity.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegExp {
    pub source: Rc<str>,
    pub flags: Rc<str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValue {
    pub name: Rc<str>,
    pub message: Rc<str>,
}

/// A point in time, in milliseconds since the unix epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct DateValue {
    // Integral and within MAX_TIME_VALUE, or NaN for an invalid date.
    time: f64,
}

impl DateValue {
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_valid(&self) -> bool {
        !self.time.is_nan()
    }

    // The calendar year and a date time that agrees with `self` on
    // everything but the year. Years past chrono's range are shifted by
    // whole 400 year eras.
    fn calendar(&self) -> Option<(i64, DateTime<Utc>)> {
        if !self.is_valid() {
            return None;
        }
        let ms = self.time as i64;
        let eras = ms.div_euclid(ERA_MS);
        let dt = DateTime::from_timestamp_millis(ms.rem_euclid(ERA_MS))?;
        Some((i64::from(dt.year()) + eras * ERA_YEARS, dt))
    }

    /// `YYYY-MM-DDTHH:mm:ss.sssZ`, with a signed six digit year outside
    /// 0000 to 9999.
    pub fn to_iso_string(&self) -> Option<String> {
        let (year, dt) = self.calendar()?;
        let year = if (0..=9999).contains(&year) {
            format!("{year:04}")
        } else {
            let sign = if year < 0 { '-' } else { '+' };
            format!("{sign}{:06}", year.abs())
        };
        Some(format!("{year}{}", dt.format("-%m-%dT%H:%M:%S%.3fZ")))
    }

    fn to_display_string(&self) -> String {
        match self.calendar() {
            Some((year, dt)) => {
                let sign = if year < 0 { "-" } else { "" };
                format!(
                    "{} {sign}{:04} {}",
                    dt.format("%a %b %d"),
                    year.abs(),
                    dt.format("%H:%M:%S GMT+0000 (Coordinated Universal Time)")
                )
            }
            None => "Invalid Date".to_string(),
        }
    }
}

fn array_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => key.parse().ok(),
        _ => None,
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;
        match self {
            // Inside arrays these take the place of the missing element.
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if !n.is_finite() => serializer.serialize_none(),
            Value::Number(n) => {
                let v = serde_json::Number::from_str(&number_to_string(*n))
                    .map_err(|_| Error::custom("could not serialize number"))?;
                v.serialize(serializer)
            }
            Value::String(s) => serializer.serialize_str(s.as_ref()),
            Value::Array(a) => {
                let mut seq = serializer.serialize_seq(Some(a.len()))?;
                for item in a.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(o) => o.serialize(serializer),
            Value::Date(d) => match d.to_iso_string() {
                Some(s) => serializer.serialize_str(&s),
                None => serializer.serialize_none(),
            },
            // No enumerable own fields.
            Value::RegExp(_) | Value::Error(_) => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let written = |v: &&Value| !matches!(v, Value::Undefined | Value::Function(_));
        let len = self.fields.values().filter(written).count();
        let mut map = serializer.serialize_map(Some(len))?;
        for (k, v) in self.fields.iter() {
            if written(&v) {
                map.serialize_entry(k.as_ref(), v)?;
            }
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a value")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(v as f64))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(v))
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(s))
    }

    fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::from(s))
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut arr = vec![];
        while let Some(v) = visitor.next_element()? {
            arr.push(v);
        }
        Ok(Value::from(arr))
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut object = Object::new();
        while let Some((key, value)) = visitor.next_entry::<String, Value>()? {
            object.insert(key, value);
        }
        Ok(Value::from(object))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_js_string())
    }
}

impl Value {
    pub fn new_object() -> Value {
        Value::from(Object::new())
    }

    pub fn new_array() -> Value {
        Value::from(vec![])
    }

    /// A date at `time` milliseconds since the epoch. Fractions are
    /// dropped; non-finite times and times beyond 8.64e15 give an invalid
    /// date.
    pub fn new_date(time: f64) -> Value {
        let time = if time.is_finite() && time.abs() <= MAX_TIME_VALUE {
            // Adding zero turns a negative zero positive.
            time.trunc() + 0.0
        } else {
            f64::NAN
        };
        Value::Date(Rc::new(DateValue { time }))
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Value {
        Value::new_date(dt.timestamp_millis() as f64)
    }

    pub fn new_regexp(source: &str, flags: &str) -> Value {
        Value::RegExp(Rc::new(RegExp {
            source: source.into(),
            flags: flags.into(),
        }))
    }

    pub fn new_error(message: &str) -> Value {
        Value::Error(Rc::new(ErrorValue {
            name: "Error".into(),
            message: message.into(),
        }))
    }

    pub fn new_function(name: &str, fcn: BuiltinFcn) -> Value {
        Value::Function(Rc::new(Function::new(name, fcn)))
    }

    pub fn from_json_str(json: &str) -> Result<Value> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_str(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Value> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Value::Array(Rc::new(a))
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(Rc::new(o))
    }
}

impl From<Rc<Object>> for Value {
    fn from(o: Rc<Object>) -> Self {
        Value::Object(o)
    }
}

impl Value {
    pub fn from_array(a: Vec<Value>) -> Value {
        Value::from(a)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// The not-a-number sentinel.
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Objects and arrays carry properties; everything else does not.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    pub fn is_empty_object(&self) -> bool {
        matches!(self, Value::Object(o) if o.is_empty())
    }

    pub fn as_bool(&self) -> Result<&bool> {
        match self {
            Value::Bool(b) => Ok(b),
            _ => Err(anyhow!("not a bool")),
        }
    }

    pub fn as_string(&self) -> Result<&Rc<str>> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(anyhow!("not a string")),
        }
    }

    pub fn as_number(&self) -> Result<&f64> {
        match self {
            Value::Number(n) => Ok(n),
            _ => Err(anyhow!("not a number")),
        }
    }

    pub fn as_array(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(anyhow!("not an array")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Ok(Rc::make_mut(a)),
            _ => Err(anyhow!("not an array")),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(anyhow!("not an object")),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(o) => Ok(Rc::make_mut(o)),
            _ => Err(anyhow!("not an object")),
        }
    }
}

// Coercions.
impl Value {
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Numeric value of `self`; NaN when there is none.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::Date(d) => d.time,
            // An array converts through its joined string form.
            Value::Array(_) => string_to_number(&self.to_js_string()),
            Value::Object(_) | Value::Function(_) | Value::RegExp(_) | Value::Error(_) => {
                f64::NAN
            }
        }
    }

    pub fn to_int32(&self) -> i32 {
        to_int32(self.to_number())
    }

    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::String(s) => s.to_string(),
            Value::Array(a) => a
                .iter()
                .map(|v| match v {
                    Value::Undefined | Value::Null => String::new(),
                    _ => v.to_js_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Function(fcn) => format!("function {}() {{ [native code] }}", fcn.name()),
            Value::Date(d) => d.to_display_string(),
            Value::RegExp(re) => format!("/{}/{}", re.source, re.flags),
            Value::Error(e) if e.message.is_empty() => e.name.to_string(),
            Value::Error(e) => format!("{}: {}", e.name, e.message),
        }
    }
}

// Property access.
impl Value {
    /// How `key` resolves on `self`, if at all.
    ///
    /// Only composites carry properties. An array's own keys are its
    /// canonical indices and `length`.
    pub fn property_kind(&self, key: &str) -> Option<PropertyKind> {
        match self {
            Value::Object(o) => o.property_kind(key),
            Value::Array(_) if key == "length" => Some(PropertyKind::Own),
            Value::Array(a) => match array_index(key) {
                Some(idx) if idx < a.len() => Some(PropertyKind::Own),
                _ => None,
            },
            _ => None,
        }
    }

    /// The value `key` resolves to on `self`, own or inherited.
    pub fn get_property(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(o) => o.get(key).cloned(),
            Value::Array(a) if key == "length" => Some(Value::from(a.len())),
            Value::Array(a) => array_index(key).and_then(|idx| a.get(idx).cloned()),
            _ => None,
        }
    }
}

impl ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        match self.as_array() {
            Ok(a) if index < a.len() => &a[index],
            _ => &Value::Undefined,
        }
    }
}

impl ops::Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Value::Object(o) => o.get(key).unwrap_or(&Value::Undefined),
            Value::Array(a) => match array_index(key) {
                Some(idx) if idx < a.len() => &a[idx],
                _ => &Value::Undefined,
            },
            _ => &Value::Undefined,
        }
    }
}
