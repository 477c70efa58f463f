use std::fmt;
use thiserror::Error;

/// A single rejected field in a prediction request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be greater than or equal to {min} (got {value})")]
    BelowMinimum {
        field: &'static str,
        value: f64,
        min: f64,
    },

    #[error("{field} must be less than or equal to {max} (got {value})")]
    AboveMaximum {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("{field} must be a whole number (got {value})")]
    NotWholeNumber { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::BelowMinimum { field, .. }
            | ValidationError::AboveMaximum { field, .. }
            | ValidationError::NotWholeNumber { field, .. }
            | ValidationError::NotFinite { field } => field,
        }
    }

    /// Machine-readable error kind, mirrors the `type` key of the 422 body
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::BelowMinimum { .. } => "value_error.number.not_ge",
            ValidationError::AboveMaximum { .. } => "value_error.number.not_le",
            ValidationError::NotWholeNumber { .. } => "type_error.integer",
            ValidationError::NotFinite { .. } => "type_error.float",
        }
    }
}

/// Every violation found in one request, in field order
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Errors raised while loading the model artifact at startup
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model file not found at {path}")]
    NotFound { path: String },

    #[error("Failed to read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Model expects {actual} features, feature registry defines {expected}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("Feature order mismatch at column {index}: expected '{expected}', artifact has '{actual}'")]
    FeatureOrder {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("Model artifact contains non-finite parameters")]
    NonFiniteParameters,

    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("Model backend error: {0}")]
    Backend(String),
}

/// Errors raised by a single call into the model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("model returned a non-finite value")]
    NonFiniteOutput,

    #[error("model returned no output")]
    EmptyOutput,

    #[error("prediction timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("{0}")]
    Backend(String),
}

/// Everything that can go wrong on the request path
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Model not loaded")]
    ModelUnavailable { reason: String },

    #[error("{0}")]
    Prediction(#[from] PredictionError),
}

impl ServiceError {
    /// Outcome label used for metrics and logs
    pub fn outcome(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation_error",
            ServiceError::ModelUnavailable { .. } => "model_unavailable",
            ServiceError::Prediction(_) => "prediction_error",
        }
    }
}
