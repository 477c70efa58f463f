//! Observability configuration parsing from environment variables.
//!
//! This module handles loading monitoring and metrics configuration.

use super::env_source::{Lookup, parse_bool};

/// Observability environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityEnvConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityEnvConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

impl ObservabilityEnvConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            metrics_enabled: parse_bool(lookup, "METRICS_ENABLED", true),
        }
    }
}
