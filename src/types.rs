// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::error::Error;
use crate::value::Value;

use core::fmt;
use core::str::FromStr;

/// Coarse structural classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
    Date,
    RegExp,
    Error,
}

impl TypeTag {
    pub const ALL: [TypeTag; 11] = [
        TypeTag::Undefined,
        TypeTag::Null,
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Array,
        TypeTag::Object,
        TypeTag::Function,
        TypeTag::Date,
        TypeTag::RegExp,
        TypeTag::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Function => "function",
            TypeTag::Date => "date",
            TypeTag::RegExp => "regexp",
            TypeTag::Error => "error",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnknownTypeTag(s.to_string()))
    }
}

pub fn type_of(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null => TypeTag::Null,
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Array(_) => TypeTag::Array,
        Value::Object(_) => TypeTag::Object,
        Value::Function(_) => TypeTag::Function,
        Value::Date(_) => TypeTag::Date,
        Value::RegExp(_) => TypeTag::RegExp,
        Value::Error(_) => TypeTag::Error,
    }
}

/// Check the tag of `value` against `types`.
///
/// `types` is either a single tag name or an array of tag names. Any other
/// shape matches nothing.
pub fn type_in(value: &Value, types: &Value) -> bool {
    let tag = type_of(value).as_str();
    match types {
        Value::String(t) => t.as_ref() == tag,
        Value::Array(ts) => ts
            .iter()
            .any(|t| matches!(t, Value::String(t) if t.as_ref() == tag)),
        _ => false,
    }
}

pub fn type_in_tags(value: &Value, tags: &[TypeTag]) -> bool {
    tags.contains(&type_of(value))
}
