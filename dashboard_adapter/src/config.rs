//! Adapter configuration: parsing, validation, and loading.
//!
//! The configuration names the backend's base URL and, optionally, per-chart
//! colour overrides:
//!
//! ```toml
//! base_url = "http://localhost:5000"
//!
//! [charts.regionChart]
//! preset = "custom"
//! colors = ["#0ea5e9"]
//! ```
//!
//! Entrypoints:
//! - Parse + validate from a TOML string: [`load_config_str`]
//! - Parse + validate from a file path: [`load_config_path`]
//! - Environment only: [`AdapterConfig::from_env`]
//!
//! Validation normalizes the base URL (trimmed, no trailing slash, http(s)
//! only) and rejects overrides for charts no dashboard renders.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use shared_utils::env::{get_env_var, get_optional_env_var};

use crate::{
    dashboards::is_known_chart, errors::ConfigError, providers::http::normalize_base_url,
    style::ChartStyle,
};

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Environment variable that overrides the base URL.
pub const BASE_URL_ENV: &str = "DASHBOARD_API_BASE_URL";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// Scheme, host, port and optional path prefix of the analytics backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Chart name → style, replacing the dashboard layout's default.
    #[serde(default)]
    pub charts: IndexMap<String, ChartStyle>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            charts: IndexMap::new(),
        }
    }
}

impl AdapterConfig {
    /// Normalizes the base URL and checks chart override names.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(&self.base_url)?;
        if let Some(unknown) = self.charts.keys().find(|name| !is_known_chart(name)) {
            return Err(ConfigError::UnknownChart(unknown.clone()));
        }
        Ok(self)
    }

    /// Builds a config from [`BASE_URL_ENV`], which must be set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_var(BASE_URL_ENV)?;
        Self {
            base_url,
            ..Self::default()
        }
        .validate()
    }

    /// Replaces the base URL with [`BASE_URL_ENV`] when it is set, then
    /// re-validates.
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        if let Some(base_url) = get_optional_env_var(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        self.validate()
    }
}

/// Parse and validate a config from a TOML string.
///
/// Errors:
/// - TOML parse failures, including unknown keys
/// - An invalid base URL or an override for an unknown chart
pub fn load_config_str(toml_str: &str) -> Result<AdapterConfig, ConfigError> {
    let config: AdapterConfig = toml::from_str(toml_str)?;
    config.validate()
}

/// Read a config TOML file from disk, parse, and validate it.
///
/// See [`load_config_str`] for details.
pub fn load_config_path(path: impl AsRef<Path>) -> Result<AdapterConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_str(&text)
}
