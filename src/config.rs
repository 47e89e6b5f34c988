//! Prediction service settings parsed from environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::domain::currency::DEFAULT_SECONDARY_RATE;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("exchange rate must be a positive number, got {0}")]
    InvalidRate(f64),
    #[error("{name} must be at least one second")]
    InvalidTimeout { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSettings {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Secondary currency units per primary unit.
    pub secondary_rate: f64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            secondary_rate: DEFAULT_SECONDARY_RATE,
        }
    }
}

impl ServiceSettings {
    /// Build settings from environment variables.
    ///
    /// Optional:
    /// - `PRICE_SERVICE_URL`: default `http://127.0.0.1:8000/`
    /// - `PRICE_SERVICE_TIMEOUT_SECS`: default 10
    /// - `PRICE_SERVICE_CONNECT_TIMEOUT_SECS`: default 5
    /// - `PRICE_INR_PER_USD`: default 83.0
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = Self {
            base_url: std::env::var("PRICE_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string()),
            request_timeout_secs: env_parse_secs(
                "PRICE_SERVICE_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_timeout_secs: env_parse_secs(
                "PRICE_SERVICE_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
            secondary_rate: env_parse("PRICE_INR_PER_USD", DEFAULT_SECONDARY_RATE),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.service_url()?;
        if !(self.secondary_rate.is_finite() && self.secondary_rate > 0.0) {
            return Err(ConfigError::InvalidRate(self.secondary_rate));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                name: "request timeout",
            });
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                name: "connect timeout",
            });
        }
        Ok(())
    }

    /// Base URL with a trailing slash so relative joins keep any path prefix.
    pub fn service_url(&self) -> Result<Url, ConfigError> {
        let trimmed = self.base_url.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        let url = Url::parse(&normalized).map_err(|err| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Values the settings page applied on top of the environment. Only these
/// are persisted, so later changes to the environment still take effect for
/// everything the user never touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub secondary_rate: Option<f64>,
}

impl SettingsOverrides {
    /// Records the fields of `applied` that differ from `base`.
    pub fn between(base: &ServiceSettings, applied: &ServiceSettings) -> Self {
        Self {
            base_url: (applied.base_url != base.base_url).then(|| applied.base_url.clone()),
            request_timeout_secs: (applied.request_timeout_secs != base.request_timeout_secs)
                .then_some(applied.request_timeout_secs),
            secondary_rate: (applied.secondary_rate != base.secondary_rate)
                .then_some(applied.secondary_rate),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn layer_over(&self, base: &ServiceSettings) -> Result<ServiceSettings, ConfigError> {
        let settings = ServiceSettings {
            base_url: self.base_url.clone().unwrap_or_else(|| base.base_url.clone()),
            request_timeout_secs: self.request_timeout_secs.unwrap_or(base.request_timeout_secs),
            secondary_rate: self.secondary_rate.unwrap_or(base.secondary_rate),
            ..base.clone()
        };
        settings.validate()?;
        Ok(settings)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Like `env_parse`, but zero is treated as unparsable.
fn env_parse_secs(key: &str, default: u64) -> u64 {
    match env_parse(key, default) {
        0 => default,
        secs => secs,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
