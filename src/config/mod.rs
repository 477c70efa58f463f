//! Configuration module for the prediction service.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Server, Model, CORS, and Observability.

mod cors_config;
pub mod env_source;
mod model_config;
mod observability_config;
mod server_config;

pub use cors_config::{AllowedOrigins, CorsEnvConfig};
pub use model_config::{DEFAULT_MODEL_PATH, ModelEnvConfig};
pub use observability_config::ObservabilityEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};
use env_source::{Lookup, process_env};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model: ModelEnvConfig,
    pub cors: CorsEnvConfig,
    pub observability: ObservabilityEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&process_env)
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_lookup(lookup).context("Failed to load server config")?,
            model: ModelEnvConfig::from_lookup(lookup)?,
            cors: CorsEnvConfig::from_lookup(lookup).context("Failed to load CORS config")?,
            observability: ObservabilityEnvConfig::from_lookup(lookup),
        })
    }
}
