//! Server configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid SNOWAPP_BACKEND_URL '{0}': expected an http:// or https:// URL")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Geometry service base URL, without a trailing slash.
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SNOWAPP_BACKEND_URL`: default `http://127.0.0.1:8000`
    /// - `SNOWAPP_BACKEND_TIMEOUT_SECS`: default 30
    /// - `SNOWAPP_BACKEND_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let backend_url = parse_backend_url(lookup("SNOWAPP_BACKEND_URL").as_deref())?;
        let timeouts = BackendTimeouts {
            request_secs: parse_secs(lookup("SNOWAPP_BACKEND_TIMEOUT_SECS").as_deref(), DEFAULT_BACKEND_TIMEOUT_SECS),
            connect_secs: parse_secs(
                lookup("SNOWAPP_BACKEND_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            ),
        };
        Ok(Self { port, backend_url, timeouts })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    let trimmed = value.trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidBackendUrl(value.to_owned())),
    }
}

/// Positive whole seconds; anything else falls back to `default`.
fn parse_secs(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
