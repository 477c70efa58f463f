//! CORS configuration parsing from environment variables.
//!
//! Defaults to fully open (any origin, method and header). An explicit
//! origin list narrows it. Credentials require an explicit list.

use super::env_source::{Lookup, parse_bool, string_or};
use anyhow::{Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsEnvConfig {
    pub allowed_origins: AllowedOrigins,
    pub allow_credentials: bool,
}

impl Default for CorsEnvConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            allow_credentials: false,
        }
    }
}

impl CorsEnvConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self> {
        let origins_str = string_or(lookup, "CORS_ALLOWED_ORIGINS", "*");
        let allowed_origins = Self::parse_origins(&origins_str)?;
        let allow_credentials = parse_bool(lookup, "CORS_ALLOW_CREDENTIALS", false);

        if allow_credentials && allowed_origins == AllowedOrigins::Any {
            bail!("CORS_ALLOW_CREDENTIALS=true requires an explicit CORS_ALLOWED_ORIGINS list");
        }

        Ok(Self {
            allowed_origins,
            allow_credentials,
        })
    }

    fn parse_origins(raw: &str) -> Result<AllowedOrigins> {
        let trimmed = raw.trim();
        if trimmed == "*" {
            return Ok(AllowedOrigins::Any);
        }

        let origins: Vec<String> = trimmed
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if origins.is_empty() {
            bail!("CORS_ALLOWED_ORIGINS is empty. Use '*' or a comma-separated list");
        }
        if origins.iter().any(|o| o == "*") {
            bail!("CORS_ALLOWED_ORIGINS cannot mix '*' with explicit origins");
        }
        Ok(AllowedOrigins::List(origins))
    }
}
