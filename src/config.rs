//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while assembling the host configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a TCP port")]
    InvalidPort { var: String, value: String },

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` the WASM bundle is served from.
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SITE_ROOT`: directory containing the built `pkg/` bundle
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self { port: env_port("PORT")?, site_root: env_path("SITE_ROOT") })
    }
}

pub(crate) fn env_port(key: &str) -> Result<u16, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => parse_port(key, &raw),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

fn parse_port(key: &str, raw: &str) -> Result<u16, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    trimmed
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::InvalidPort { var: key.to_owned(), value: raw.to_owned() })
}

pub(crate) fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}
