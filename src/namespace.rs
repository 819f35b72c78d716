// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::builtins;
use crate::error::Error;
use crate::value::Value;

use core::fmt;
use std::collections::BTreeMap;

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;

pub type BuiltinFcn = fn(&[Value]) -> Result<Value>;

/// A set of named functions.
///
/// Names are installed at most once. Later installs under an existing name
/// are skipped, so merging several function sets never replaces what is
/// already there.
#[derive(Clone, Default)]
pub struct Namespace {
    functions: BTreeMap<String, BuiltinFcn>,
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.functions.keys()).finish()
    }
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `fcn` as `name` unless the name is taken. Returns whether it
    /// was installed.
    pub fn insert(&mut self, name: impl Into<String>, fcn: BuiltinFcn) -> bool {
        let name = name.into();
        if self.functions.contains_key(&name) {
            debug!("namespace: `{name}` already defined, skipping");
            return false;
        }
        debug!("namespace: installing `{name}`");
        self.functions.insert(name, fcn);
        true
    }

    /// Install every name in `functions` that is not already defined.
    /// Returns the number installed.
    pub fn mixin<I, S>(&mut self, functions: I) -> usize
    where
        I: IntoIterator<Item = (S, BuiltinFcn)>,
        S: Into<String>,
    {
        let mut installed = 0;
        for (name, fcn) in functions {
            if self.insert(name, fcn) {
                installed += 1;
            }
        }
        installed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<BuiltinFcn> {
        self.functions.get(name).copied()
    }

    /// The function installed as `name`, wrapped as a value.
    pub fn function(&self, name: &str) -> Option<Value> {
        self.get(name).map(|fcn| Value::new_function(name, fcn))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self.get(name) {
            Some(fcn) => fcn(args),
            None => Err(Error::UnknownFunction(name.to_string()).into()),
        }
    }
}

lazy_static! {
    /// Every library function under its canonical name.
    pub static ref BUILTINS: Namespace = {
        let mut m = Namespace::new();
        builtins::register(&mut m);
        m
    };
}
