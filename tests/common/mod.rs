#![allow(dead_code)]

use edupredict::domain::ml::FEATURE_NAMES;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// Coefficients giving 13.7 for the reference request:
/// 2020 * 0.01 + 3.0 * 0.5 - 8.0
pub fn reference_coefficients() -> Vec<f64> {
    vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.01, 0.0, 0.5, 0.0]
}

pub const REFERENCE_INTERCEPT: f64 = -8.0;

/// Write the reference linear-model JSON artifact into `dir` and return its path
pub fn write_linear_artifact(dir: &Path) -> PathBuf {
    write_artifact_with(dir, &reference_coefficients(), REFERENCE_INTERCEPT)
}

pub fn write_artifact_with(dir: &Path, coefficients: &[f64], intercept: f64) -> PathBuf {
    let path = dir.join("education_prediction_model.json");
    let artifact = json!({
        "feature_names": FEATURE_NAMES,
        "coefficients": coefficients,
        "intercept": intercept,
        "version": "test-1"
    });
    std::fs::write(&path, artifact.to_string()).expect("write artifact");
    path
}

/// Scenario from the service contract: totals land exactly on the High thresholds
pub fn reference_request() -> Value {
    json!({
        "primary_expenditure_usd": 600,
        "secondary_expenditure_usd": 300,
        "tertiary_expenditure_usd": 100,
        "primary_expenditure_gdp": 1.5,
        "secondary_expenditure_gdp": 1.0,
        "tertiary_expenditure_gdp": 0.5,
        "year": 2020
    })
}
