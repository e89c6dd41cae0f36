//! Configuration surface for scalar assembly.
//!
//! The embedding application supplies a map of config key to per-scalar
//! settings, typically decoded from its own JSON/TOML configuration.
//! Keys that do not name a known scalar are ignored.

use std::collections::HashMap;

use serde::Deserialize;

/// Per-scalar option map. No scalar accepts options today; any provided
/// key is rejected at construction time.
pub type ScalarOptions = serde_json::Map<String, serde_json::Value>;

/// Settings for a single scalar, keyed by its config key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScalarConfig {
    /// Absent counts as enabled; only an explicit `false` disables.
    pub enabled: Option<bool>,

    /// Exposed type name override. An empty string falls back to the
    /// default type name.
    pub name: Option<String>,

    /// Constructor options forwarded to the codec factory.
    pub options: ScalarOptions,
}

impl ScalarConfig {
    /// True unless explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }

    /// The exposed type name, falling back past empty overrides.
    pub fn exposed_name<'a>(&'a self, default: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => default,
        }
    }
}

/// Full assembly configuration: config key -> per-scalar settings.
pub type ScalarsConfig = HashMap<String, ScalarConfig>;
