//! Heuristic confidence annotation.
//!
//! The label describes the magnitude of the submitted investment figures.
//! It says nothing about the statistical uncertainty of the model output.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const HIGH_MIN_EXPENDITURE: f64 = 1000.0;
pub const HIGH_MIN_GDP: f64 = 3.0;
pub const MEDIUM_MIN_EXPENDITURE: f64 = 500.0;
pub const MEDIUM_MIN_GDP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Classify raw input totals. Thresholds are exclusive: a total equal to a
    /// threshold falls through to the next tier.
    pub fn classify(total_expenditure: f64, total_gdp: f64) -> Self {
        if total_expenditure > HIGH_MIN_EXPENDITURE && total_gdp > HIGH_MIN_GDP {
            ConfidenceLevel::High
        } else if total_expenditure > MEDIUM_MIN_EXPENDITURE && total_gdp > MEDIUM_MIN_GDP {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "Based on substantial government investment in education",
            ConfidenceLevel::Medium => "Based on moderate government investment in education",
            ConfidenceLevel::Low => "Based on limited government investment in education",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
