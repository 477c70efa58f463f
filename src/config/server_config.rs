//! HTTP server configuration parsing from environment variables.

use super::env_source::{Lookup, parse_or, string_or};
use anyhow::{Result, ensure};
use std::time::Duration;

/// HTTP server environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEnvConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_ms: u64,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_ms: 5000,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self> {
        let defaults = Self::default();
        let request_timeout_ms =
            parse_or(lookup, "REQUEST_TIMEOUT_MS", defaults.request_timeout_ms)?;
        ensure!(request_timeout_ms > 0, "REQUEST_TIMEOUT_MS must be positive");

        Ok(Self {
            host: string_or(lookup, "HOST", &defaults.host),
            port: parse_or(lookup, "PORT", defaults.port)?,
            request_timeout_ms,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
