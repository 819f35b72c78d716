// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod builtins;
mod conversions;
mod encoding;
mod error;
mod namespace;
mod number;
mod reflect;
mod rounding;
mod types;
mod value;

#[cfg(feature = "arc")]
pub(crate) use std::sync::Arc as Rc;

#[cfg(not(feature = "arc"))]
pub(crate) use std::rc::Rc;

pub use conversions::{to_float, to_int};
pub use encoding::{count, keys, serialize, unserialize};
pub use error::Error;
pub use namespace::{BuiltinFcn, Namespace, BUILTINS};
pub use reflect::{
    equal, prop, prop_equals, prop_own, prop_path, prop_path_type, prop_prototype, prop_type,
};
pub use rounding::{to_number, to_number_f64, RoundingMode};
pub use types::{type_in, type_in_tags, type_of, TypeTag};
pub use value::{DateValue, ErrorValue, Function, Object, PropertyKind, RegExp, Value};

/// Items in `unstable` are likely to change.
pub mod unstable {
    pub use crate::number::{number_to_string, parse_float, parse_int, string_to_number};
}
