use super::predictor::{RegressionModel, ensure_finite};
use crate::domain::errors::{ModelLoadError, PredictionError};
use crate::domain::ml::{FEATURE_COUNT, FeatureVector};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::fs::File;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{error, info};

pub type SmartCoreLinearModel = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

pub struct SmartCorePredictor {
    model: SmartCoreLinearModel,
}

impl SmartCorePredictor {
    pub fn load(model_path: &Path) -> Result<Self, ModelLoadError> {
        let display = model_path.display().to_string();
        if !model_path.exists() {
            error!("ML Model file not found at {:?}", model_path);
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

        // Smartcore models are persisted with serde_json
        let model: SmartCoreLinearModel =
            serde_json::from_reader(std::io::Cursor::new(&buffer)).map_err(|e| {
                error!("Failed to deserialize ML model: {}", e);
                ModelLoadError::from(e)
            })?;

        let predictor = Self::from_model(model)?;
        info!("Successfully loaded ML model from {:?}", model_path);
        Ok(predictor)
    }

    /// Wrap a fitted model. A zero-vector probe confirms the model accepts
    /// a `FEATURE_COUNT`-column input.
    pub fn from_model(model: SmartCoreLinearModel) -> Result<Self, ModelLoadError> {
        let predictor = Self { model };
        // smartcore asserts on shape mismatch instead of returning Err
        let probe = panic::catch_unwind(AssertUnwindSafe(|| {
            predictor.run(vec![0.0; FEATURE_COUNT])
        }));
        match probe {
            Ok(Ok(_)) => Ok(predictor),
            Ok(Err(e)) => Err(ModelLoadError::Backend(format!(
                "model rejected a {}-feature probe: {}",
                FEATURE_COUNT, e
            ))),
            Err(_) => Err(ModelLoadError::Backend(format!(
                "model panicked on a {}-feature probe",
                FEATURE_COUNT
            ))),
        }
    }

    fn run(&self, input_vec: Vec<f64>) -> Result<f64, PredictionError> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![input_vec])
            .map_err(|e| PredictionError::Backend(format!("Matrix creation failed: {}", e)))?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| PredictionError::Backend(format!("Prediction failed: {}", e)))?;

        predictions
            .first()
            .copied()
            .ok_or(PredictionError::EmptyOutput)
    }
}

impl RegressionModel for SmartCorePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let raw = self.run(features.as_slice().to_vec())?;
        ensure_finite(raw)
    }

    fn name(&self) -> &str {
        "SmartCore Linear Regression"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use smartcore::linear::linear_regression::LinearRegressionParameters;

    /// Fit y = 2 + sum(x_i * (i + 1) / 10) on random, full-rank data
    fn fitted_model() -> SmartCoreLinearModel {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rows = Vec::new();
        let mut targets = Vec::new();
        for _ in 0..40 {
            let row: Vec<f64> = (0..FEATURE_COUNT)
                .map(|_| rng.random_range(0.0..10.0))
                .collect();
            let y = 2.0
                + row
                    .iter()
                    .enumerate()
                    .map(|(i, x)| x * (i as f64 + 1.0) / 10.0)
                    .sum::<f64>();
            rows.push(row);
            targets.push(y);
        }
        let x = DenseMatrix::from_2d_vec(&rows).unwrap();
        LinearRegression::fit(&x, &targets, LinearRegressionParameters::default()).unwrap()
    }

    #[test]
    fn test_smartcore_predictor_roundtrips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, serde_json::to_string(&fitted_model()).unwrap()).unwrap();

        let predictor = SmartCorePredictor::load(&path).unwrap();
        // Zero input leaves only the intercept
        let at_origin = predictor.run(vec![0.0; FEATURE_COUNT]).unwrap();
        assert!((at_origin - 2.0).abs() < 1e-6);

        let ones = predictor.run(vec![1.0; FEATURE_COUNT]).unwrap();
        // 2 + (1 + 2 + ... + 10) / 10
        assert!((ones - 7.5).abs() < 1e-6);
    }

    #[test]
    fn test_smartcore_missing_file() {
        let err = SmartCorePredictor::load(Path::new("non_existent.json"))
            .err()
            .unwrap();
        assert!(matches!(err, ModelLoadError::NotFound { .. }));
    }
}
