//! Model artifact configuration parsing from environment variables.

use super::env_source::{Lookup, string_or};
use crate::application::ml::ModelFormat;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_MODEL_PATH: &str = "models/education_prediction_model.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ModelEnvConfig {
    pub path: PathBuf,
    pub format: ModelFormat,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            format: ModelFormat::Linear,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self> {
        let format_str = string_or(lookup, "MODEL_FORMAT", "linear");
        let format = ModelFormat::from_str(&format_str).context("Failed to load model config")?;

        Ok(Self {
            path: PathBuf::from(string_or(lookup, "MODEL_PATH", DEFAULT_MODEL_PATH)),
            format,
        })
    }
}
