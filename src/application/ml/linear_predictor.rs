use super::predictor::{RegressionModel, ensure_finite};
use crate::domain::errors::{ModelLoadError, PredictionError};
use crate::domain::ml::FeatureVector;
use crate::domain::ml::feature_registry::{FEATURE_COUNT, check_feature_order};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Portable export of a fitted linear regression.
///
/// `feature_names` is optional, but when present it must list the training
/// columns in registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModelArtifact {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug)]
pub struct LinearPredictor {
    coefficients: Vec<f64>,
    intercept: f64,
    version: String,
    model_path: Option<PathBuf>,
}

impl LinearPredictor {
    /// Load and check a JSON artifact from disk.
    pub fn load(model_path: &Path) -> Result<Self, ModelLoadError> {
        let display = model_path.display().to_string();
        if !model_path.exists() {
            error!("Linear model file not found at {:?}", model_path);
            return Err(ModelLoadError::NotFound { path: display });
        }

        let mut buffer = Vec::new();
        File::open(model_path)
            .and_then(|mut file| file.read_to_end(&mut buffer))
            .map_err(|source| {
                error!("Failed to read model file: {}", source);
                ModelLoadError::Io {
                    path: display.clone(),
                    source,
                }
            })?;

        let artifact: LinearModelArtifact = serde_json::from_slice(&buffer).map_err(|e| {
            error!("Failed to deserialize linear model: {}", e);
            ModelLoadError::from(e)
        })?;

        let mut predictor = Self::from_artifact(artifact)?;
        predictor.model_path = Some(model_path.to_path_buf());
        info!("Successfully loaded linear model from {:?}", model_path);
        Ok(predictor)
    }

    /// Build a predictor from an in-memory artifact, checking arity and column order.
    pub fn from_artifact(artifact: LinearModelArtifact) -> Result<Self, ModelLoadError> {
        if artifact.coefficients.len() != FEATURE_COUNT {
            return Err(ModelLoadError::FeatureCount {
                expected: FEATURE_COUNT,
                actual: artifact.coefficients.len(),
            });
        }

        if let Some(names) = &artifact.feature_names {
            check_feature_order(names).map_err(|(index, expected, actual)| {
                ModelLoadError::FeatureOrder {
                    index,
                    expected,
                    actual,
                }
            })?;
        }

        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite())
        {
            return Err(ModelLoadError::NonFiniteParameters);
        }

        Ok(Self {
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
            version: artifact.version.unwrap_or_else(|| "v1.0".to_string()),
            model_path: None,
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }
}

impl RegressionModel for LinearPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let inputs = features.as_slice();
        if inputs.len() != self.coefficients.len() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: inputs.len(),
            });
        }

        let dot: f64 = inputs
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum();
        ensure_finite(dot + self.intercept)
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }

    fn version(&self) -> &str {
        &self.version
    }
}
