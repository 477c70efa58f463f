use super::linear_predictor::LinearPredictor;
use super::predictor::RegressionModel;
use super::smartcore_predictor::SmartCorePredictor;
use crate::domain::errors::ModelLoadError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// On-disk format of the model artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// JSON coefficients + intercept
    Linear,
    /// serde_json-serialized smartcore LinearRegression
    SmartCore,
    /// ONNX graph, requires the `onnx` feature
    Onnx,
}

impl FromStr for ModelFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(ModelFormat::Linear),
            "smartcore" => Ok(ModelFormat::SmartCore),
            "onnx" => Ok(ModelFormat::Onnx),
            _ => anyhow::bail!(
                "Invalid MODEL_FORMAT: {}. Must be 'linear', 'smartcore', or 'onnx'",
                s
            ),
        }
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelFormat::Linear => "linear",
            ModelFormat::SmartCore => "smartcore",
            ModelFormat::Onnx => "onnx",
        };
        f.write_str(name)
    }
}

pub struct ModelLoader;

impl ModelLoader {
    /// Load the artifact at `path` with the backend matching `format`.
    pub fn load(
        format: ModelFormat,
        path: &Path,
    ) -> Result<Arc<dyn RegressionModel>, ModelLoadError> {
        match format {
            ModelFormat::Linear => Ok(Arc::new(LinearPredictor::load(path)?)),
            ModelFormat::SmartCore => Ok(Arc::new(SmartCorePredictor::load(path)?)),
            ModelFormat::Onnx => Self::load_onnx(path),
        }
    }

    #[cfg(feature = "onnx")]
    fn load_onnx(path: &Path) -> Result<Arc<dyn RegressionModel>, ModelLoadError> {
        Ok(Arc::new(super::onnx_predictor::OnnxPredictor::load(path)?))
    }

    #[cfg(not(feature = "onnx"))]
    fn load_onnx(_path: &Path) -> Result<Arc<dyn RegressionModel>, ModelLoadError> {
        Err(ModelLoadError::UnsupportedFormat(
            "onnx support is not compiled in (build with --features onnx)".to_string(),
        ))
    }
}
