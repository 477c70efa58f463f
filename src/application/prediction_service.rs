//! Prediction pipeline.
//!
//! `PredictionService` is built once at startup and shared read-only by every
//! request handler. It owns the loaded model, or the reason it failed to load.
//!
//! Model calls run on tokio's blocking pool. A call that exceeds the timeout
//! is reported as failed, but its thread is not reclaimed until the model
//! returns: a model that hangs holds one blocking thread per timed-out request.

use crate::application::ml::{ModelFormat, ModelLoader, RegressionModel};
use crate::domain::errors::{ModelLoadError, PredictionError, ServiceError};
use crate::domain::ml::FeatureVector;
use crate::domain::prediction::{ConfidenceLevel, PredictionRequest, PredictionResponse};
use crate::domain::validation::RequestValidator;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub const DEFAULT_PREDICTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
enum ModelState {
    Loaded(Arc<dyn RegressionModel>),
    Unavailable { reason: String },
}

/// Identity of the loaded model, for logs and the service descriptor
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
}

#[derive(Clone)]
pub struct PredictionService {
    model: ModelState,
    timeout: Duration,
}

impl PredictionService {
    pub fn new(model: Arc<dyn RegressionModel>) -> Self {
        Self {
            model: ModelState::Loaded(model),
            timeout: DEFAULT_PREDICTION_TIMEOUT,
        }
    }

    /// A service whose every prediction fails with `ModelUnavailable`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            model: ModelState::Unavailable {
                reason: reason.into(),
            },
            timeout: DEFAULT_PREDICTION_TIMEOUT,
        }
    }

    pub fn from_load_result(result: Result<Arc<dyn RegressionModel>, ModelLoadError>) -> Self {
        match result {
            Ok(model) => {
                info!("Model ready: {} {}", model.name(), model.version());
                Self::new(model)
            }
            Err(e) => {
                error!("Error loading model: {}. Service will run degraded.", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    /// Load the artifact and build the service. A load failure never aborts:
    /// the service comes up degraded instead.
    pub fn initialize(format: ModelFormat, path: &Path, timeout: Duration) -> Self {
        info!("Loading {} model from {:?}", format, path);
        Self::from_load_result(ModelLoader::load(format, path)).with_timeout(timeout)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_model_loaded(&self) -> bool {
        matches!(self.model, ModelState::Loaded(_))
    }

    pub fn model_info(&self) -> Option<ModelInfo> {
        match &self.model {
            ModelState::Loaded(model) => Some(ModelInfo {
                name: model.name().to_string(),
                version: model.version().to_string(),
            }),
            ModelState::Unavailable { .. } => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.model {
            ModelState::Loaded(_) => None,
            ModelState::Unavailable { reason } => Some(reason),
        }
    }

    /// validate -> derive -> predict -> classify
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ServiceError> {
        let validated = RequestValidator::validate(request)?;

        let model = match &self.model {
            ModelState::Loaded(model) => Arc::clone(model),
            ModelState::Unavailable { reason } => {
                return Err(ServiceError::ModelUnavailable {
                    reason: reason.clone(),
                });
            }
        };

        let features = FeatureVector::from_request(&validated);
        debug!("Derived features: {:?}", features.as_slice());

        let raw_prediction = self.run_model(model, features).await?;

        let confidence = ConfidenceLevel::classify(
            validated.total_expenditure(),
            validated.total_gdp_percentage(),
        );

        Ok(PredictionResponse::new(raw_prediction, confidence))
    }

    async fn run_model(
        &self,
        model: Arc<dyn RegressionModel>,
        features: FeatureVector,
    ) -> Result<f64, PredictionError> {
        let task = tokio::task::spawn_blocking(move || model.predict(&features));

        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(PredictionError::Backend(format!(
                "prediction task failed: {}",
                join_error
            ))),
            Err(_) => {
                let timeout_ms = self.timeout.as_millis() as u64;
                warn!(
                    "Model call exceeded {}ms; its blocking thread stays busy until the model returns",
                    timeout_ms
                );
                Err(PredictionError::Timeout { timeout_ms })
            }
        }
    }
}
