//! Environment lookup behind an explicit provider seam.
//!
//! Credential fallbacks go through [`EnvProvider`] instead of reading the
//! process environment directly, so construction can be tested without
//! mutating global state.

use std::collections::HashMap;

/// Source of environment-style configuration values.
pub trait EnvProvider: Send + Sync {
    /// Returns the value of the named variable, or `None` when unset or
    /// empty.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment. Default provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// Map-backed provider for tests and embedded configuration.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvProvider for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }
}
