//! RQL Configuration Module
//!
//! Provides configuration file support via `rql.toml`, environment variables,
//! and runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (explicit [`FilterOptions`](crate::FilterOptions))
//! 2. Environment variables (`RQL_*`, sections separated by `__`,
//!    e.g. `RQL_PAGINATION__MAX_LIMIT=500`)
//! 3. Configuration file (`rql.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Parser configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Longest accepted filter text in bytes (0 = unbounded).
    pub max_filter_length: usize,
    /// Percent-decode filter text before parsing.
    pub decode_percent_escapes: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_filter_length: 4096,
            decode_percent_escapes: false,
        }
    }
}

/// Pagination configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Limit used when the caller passes no options (0 = unbounded).
    pub default_limit: usize,
    /// Upper bound for any limit (0 = no cap).
    pub max_limit: usize,
}

impl PaginationConfig {
    /// Clamps a requested limit to `max_limit`.
    ///
    /// With a cap configured, an unbounded request (0) becomes the cap.
    #[must_use]
    pub fn effective_limit(&self, requested: usize) -> usize {
        match (requested, self.max_limit) {
            (_, 0) => requested,
            (0, max) => max,
            (req, max) => req.min(max),
        }
    }
}

/// Main RQL configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RqlConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Pagination configuration.
    pub pagination: PaginationConfig,
}

impl RqlConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("rql.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("RQL_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pagination = &self.pagination;
        if pagination.max_limit > 0 && pagination.default_limit > pagination.max_limit {
            return Err(ConfigError::InvalidValue {
                key: "pagination.default_limit".to_string(),
                message: format!(
                    "value {} exceeds pagination.max_limit {}",
                    pagination.default_limit, pagination.max_limit
                ),
            });
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
