//! Gateway configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("QA_BACKEND_URL is required")]
    MissingBackendUrl,
    #[error("QA_BACKEND_URL must be an http(s) URL, got {0:?}")]
    InvalidBackendUrl(String),
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    pub port: u16,
    pub proxy_timeout: Duration,
}

impl GatewayConfig {
    /// Build typed gateway config from environment variables.
    ///
    /// Required:
    /// - `QA_BACKEND_URL`: base URL of the QA backend, `http://` or `https://`
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `QA_PROXY_TIMEOUT_SECS`: per-request proxy timeout, default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the backend URL is missing or malformed,
    /// or a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`] with an injected variable source.
    ///
    /// # Errors
    ///
    /// See [`GatewayConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup("QA_BACKEND_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingBackendUrl)?;
        let backend_url = parse_backend_url(&raw)?;

        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_number(&lookup, "QA_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;

        Ok(Self { backend_url, port, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_backend_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidBackendUrl(raw.to_owned()))?;
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidBackendUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_number<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().parse::<T>() {
        Ok(n) if n != T::default() => Ok(n),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}
