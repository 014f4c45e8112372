//! Drag engine configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_FALLBACK_ALL_ZONES, DEFAULT_STICKY_BIAS};
use crate::error::ErrorCode;

pub const ENV_STICKY_BIAS: &str = "KANBOARD_STICKY_BIAS";
pub const ENV_FALLBACK_ALL_ZONES: &str = "KANBOARD_FALLBACK_ALL_ZONES";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Parse { key: &'static str, value: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "E_CONFIG_PARSE",
        }
    }
}

/// Tuning knobs for nearest-zone resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Squared-pixel advantage a challenger zone needs over the current best.
    pub sticky_bias: f64,
    /// Consider every zone when the pointer is outside all collections.
    pub fallback_all_zones: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self { sticky_bias: DEFAULT_STICKY_BIAS, fallback_all_zones: DEFAULT_FALLBACK_ALL_ZONES }
    }
}

impl DragConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `KANBOARD_STICKY_BIAS`: finite, non-negative float; default 10
    /// - `KANBOARD_FALLBACK_ALL_ZONES`: `true`/`false`/`1`/`0`; default true
    ///
    /// # Errors
    ///
    /// Returns a parse error naming the variable when a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Unset and non-UTF-8 variables both fall back to defaults.
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a parse error naming the variable when a value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sticky_bias = match lookup(ENV_STICKY_BIAS) {
            Some(raw) => parse_bias(&raw)?,
            None => DEFAULT_STICKY_BIAS,
        };
        let fallback_all_zones = match lookup(ENV_FALLBACK_ALL_ZONES) {
            Some(raw) => parse_bool(ENV_FALLBACK_ALL_ZONES, &raw)?,
            None => DEFAULT_FALLBACK_ALL_ZONES,
        };
        Ok(Self { sticky_bias, fallback_all_zones })
    }
}

fn parse_bias(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ConfigError::Parse { key: ENV_STICKY_BIAS, value: raw.to_string() }),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse { key, value: raw.to_string() }),
    }
}
