// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Library functions in their dynamic calling form.
//!
//! Each function takes its arguments as a slice of values. Missing
//! arguments read as `undefined`, and extra arguments are ignored.

pub mod conversions;
pub mod encoding;
pub mod numbers;
pub mod objects;
pub mod types;
pub mod utils;

use crate::namespace::Namespace;

#[rustfmt::skip]
pub fn register(m: &mut Namespace) {
    numbers::register(m);
    conversions::register(m);
    encoding::register(m);
    types::register(m);
    objects::register(m);
}
