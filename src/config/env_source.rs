//! Variable lookup shared by the `*EnvConfig` loaders.
//!
//! Loaders take a lookup function rather than reading `std::env` directly so
//! tests can feed them a map.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Reads the process environment
pub fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Lookup backed by a fixed map
pub fn from_map(vars: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
    move |key| vars.get(key).cloned()
}

pub(crate) fn string_or(lookup: Lookup<'_>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

pub(crate) fn parse_or<T>(lookup: Lookup<'_>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context(format!("Failed to parse {}", key)),
        None => Ok(default),
    }
}

pub(crate) fn parse_bool(lookup: Lookup<'_>, key: &str, default: bool) -> bool {
    lookup(key)
        .and_then(|raw| raw.trim().parse::<bool>().ok())
        .unwrap_or(default)
}
