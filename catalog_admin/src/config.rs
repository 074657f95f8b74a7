//! Client configuration: where the catalog backend lives.
//!
//! The single recognized option is `base_url`. It comes from a TOML file or,
//! as a fallback for ad-hoc use, from the `CATALOG_API_BASE_URL` environment
//! variable.

use std::path::Path;

use serde::Deserialize;
use shared_utils::env::{ConfigError, get_env_var};

use crate::errors::Error;

/// Environment variable consulted by [`AdminConfig::from_env`].
pub const BASE_URL_ENV: &str = "CATALOG_API_BASE_URL";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Backend host and optional path prefix, e.g. `http://localhost:8080`.
    pub base_url: String,
}

impl AdminConfig {
    /// Builds a config from a raw base URL, normalizing trailing slashes.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
        }
    }

    /// Reads the base URL from `CATALOG_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(get_env_var(BASE_URL_ENV)?))
    }

    /// Parses a TOML config string.
    pub fn load_str(text: &str) -> Result<Self, Error> {
        let parsed: AdminConfig =
            toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self::new(parsed.base_url))
    }

    /// Reads and parses a TOML config file.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Self::load_str(&text)
    }
}

fn normalize(raw: String) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
