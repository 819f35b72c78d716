// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// Errors raised by the namespace and parsing surface.
///
/// The rounding and reflection functions never fail; these only come out of
/// name lookups and text parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No function is installed under this name
    #[error("function `{0}` is not defined in the namespace")]
    UnknownFunction(String),
    /// Input to `unserialize` is not valid JSON
    #[error("invalid json: {0}")]
    InvalidJson(String),
    /// Name does not match any type tag
    #[error("unknown type tag `{0}`")]
    UnknownTypeTag(String),
}
