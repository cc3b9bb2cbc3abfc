//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GENERATOR_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_GENERATOR_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl GeneratorTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the upstream word/image generator. `None` disables relaying.
    pub generator_base_url: Option<String>,
    pub timeouts: GeneratorTimeouts,
}

/// Raised when an environment variable is present but unusable.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GENERATOR_BASE_URL`: relay target; blank or absent disables `/blend`
    ///   and `/generate-image`
    /// - `GENERATOR_REQUEST_TIMEOUT_SECS`: default 120
    /// - `GENERATOR_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };

        let generator_base_url = std::env::var("GENERATOR_BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let timeouts = GeneratorTimeouts {
            request_secs: env_parse_u64("GENERATOR_REQUEST_TIMEOUT_SECS", DEFAULT_GENERATOR_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("GENERATOR_CONNECT_TIMEOUT_SECS", DEFAULT_GENERATOR_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, generator_base_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
