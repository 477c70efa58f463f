use super::predictor::{RegressionModel, ensure_finite};
use crate::domain::errors::{ModelLoadError, PredictionError};
use crate::domain::ml::{FEATURE_COUNT, FeatureVector};
use ort::session::Session;
use std::path::Path;
use std::sync::Mutex;
use tracing::{error, info};

/// Runs an ONNX export of the regression model (input `[1, 10]` f32, one output value).
pub struct OnnxPredictor {
    // Session::run needs exclusive access
    session: Mutex<Session>,
}

impl OnnxPredictor {
    pub fn load(model_path: &Path) -> Result<Self, ModelLoadError> {
        if !model_path.exists() {
            error!("ONNX Model file not found at {:?}", model_path);
            return Err(ModelLoadError::NotFound {
                path: model_path.display().to_string(),
            });
        }

        let builder = Session::builder().map_err(|e| {
            error!("Failed to create ONNX session builder: {}", e);
            ModelLoadError::Backend(e.to_string())
        })?;
        let session = builder.commit_from_file(model_path).map_err(|e| {
            error!("Failed to load ONNX model: {}", e);
            ModelLoadError::Backend(e.to_string())
        })?;

        info!("Successfully loaded ONNX model from {:?}", model_path);
        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl RegressionModel for OnnxPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let mut session = self
            .session
            .lock()
            .map_err(|e| PredictionError::Backend(format!("Mutex lock failed: {}", e)))?;

        let shape = vec![1, FEATURE_COUNT];
        let input_value = ort::value::Value::from_array((shape.as_slice(), features.to_f32_vec()))
            .map_err(|e| PredictionError::Backend(format!("Input value creation failed: {}", e)))?;

        let inputs = ort::inputs![input_value];

        let outputs = session
            .run(inputs)
            .map_err(|e| PredictionError::Backend(e.to_string()))?;
        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or(PredictionError::EmptyOutput)?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictionError::Backend(e.to_string()))?;
        let value = *data.1.iter().next().ok_or(PredictionError::EmptyOutput)?;
        ensure_finite(f64::from(value))
    }

    fn name(&self) -> &str {
        "ONNX Runtime"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
