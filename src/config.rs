//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use dashboard::util::client_config::{API_BASE_ENV, DEFAULT_API_BASE_URL, normalize_base_url};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Admin REST backend the browser talks to; published in the SSR shell.
    pub api_base_url: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ADMIN_API_BASE_URL`: default `http://localhost:8080`, trailing `/` trimmed
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.clone()))?
            }
            _ => DEFAULT_PORT,
        };
        let api_base_url = lookup(API_BASE_ENV)
            .as_deref()
            .and_then(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        Ok(Self { port, api_base_url })
    }
}
