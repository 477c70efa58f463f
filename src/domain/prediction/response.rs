use super::confidence::ConfidenceLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
    pub confidence: ConfidenceLevel,
    pub message: String,
}

impl PredictionResponse {
    /// Build a response from a raw model output. The value is rounded to two decimals.
    pub fn new(raw_prediction: f64, confidence: ConfidenceLevel) -> Self {
        Self {
            prediction: round_to_cents(raw_prediction),
            confidence,
            message: confidence.message().to_string(),
        }
    }
}

/// Round to two decimal places from the exact binary value, ties to even.
///
/// `13.125` is stored exactly and becomes `13.12`; `2.675` is stored just
/// below the tie and becomes `2.67`.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
