//! The environment map produced by an activation.
//!
//! Invariants:
//! - Keys iterate in sorted order.
//! - `Debug` output never contains values; resolved variables may be secrets.

use std::collections::BTreeMap;
use std::fmt;

/// Resolved variable name to value, built up as setters run.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfiguredEnvironment {
    values: BTreeMap<String, String>,
}

impl ConfiguredEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Debug for ConfiguredEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredEnvironment")
            .field("variables", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}
