use crate::domain::errors::PredictionError;
use crate::domain::ml::FeatureVector;

/// Interface for the trained regression model.
///
/// Implementations are loaded once at startup and shared read-only across
/// requests, so `predict` takes `&self` and must be safe to call concurrently.
pub trait RegressionModel: Send + Sync {
    /// Predict school life expectancy (years) for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}

/// Reject NaN and infinities coming out of a backend
pub(crate) fn ensure_finite(value: f64) -> Result<f64, PredictionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PredictionError::NonFiniteOutput)
    }
}
