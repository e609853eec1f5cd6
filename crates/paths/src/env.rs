//! Environment lookup for the registry.
//!
//! The registry never reads `std::env` directly: everything goes through an
//! [`EnvSource`], so tests and callers can inject a fixed environment.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};

pub const HOME_VAR: &str = "HOME";
pub const HOME_FALLBACK_VAR: &str = "USERPROFILE";
pub const MCP_SERVERS_YAML_VAR: &str = "MCP_SERVERS_YAML";
pub const MCP_DIR_VAR: &str = "MCP_DIR";

pub trait EnvSource {
    fn var(&self, key: &str) -> Option<OsString>;
}

/// Reads the real process environment. Values need not be UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl AsRef<OsStr>) -> Self {
        self.vars.insert(key.into(), value.as_ref().to_os_string());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<OsString> {
        (**self).var(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Env(&'static str),
    Literal(OsString),
}

/// Ordered fallback chain. Steps are evaluated lazily and the first
/// non-empty value wins; an exhausted chain resolves to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fallback {
    steps: Vec<Step>,
}

impl Fallback {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn env(mut self, key: &'static str) -> Self {
        self.steps.push(Step::Env(key));
        self
    }

    #[must_use]
    pub fn literal(mut self, value: impl AsRef<OsStr>) -> Self {
        self.steps.push(Step::Literal(value.as_ref().to_os_string()));
        self
    }

    pub fn resolve(&self, source: &impl EnvSource) -> OsString {
        self.resolve_opt(source).unwrap_or_default()
    }

    pub fn resolve_opt(&self, source: &impl EnvSource) -> Option<OsString> {
        self.steps.iter().find_map(|step| {
            let value = match step {
                Step::Env(key) => source.var(key)?,
                Step::Literal(value) => value.clone(),
            };
            (!value.is_empty()).then_some(value)
        })
    }
}

/// `HOME`, then `USERPROFILE`, then the empty string.
pub fn home_chain() -> Fallback {
    Fallback::new().env(HOME_VAR).env(HOME_FALLBACK_VAR)
}

pub fn resolve_home(source: &impl EnvSource) -> OsString {
    home_chain().resolve(source)
}
