use serde::{Deserialize, Serialize};

/// Wire names of the request fields, also used to label validation errors.
pub mod fields {
    pub const PRIMARY_USD: &str = "primary_expenditure_usd";
    pub const SECONDARY_USD: &str = "secondary_expenditure_usd";
    pub const TERTIARY_USD: &str = "tertiary_expenditure_usd";
    pub const PRIMARY_GDP: &str = "primary_expenditure_gdp";
    pub const SECONDARY_GDP: &str = "secondary_expenditure_gdp";
    pub const TERTIARY_GDP: &str = "tertiary_expenditure_gdp";
    pub const YEAR: &str = "year";
}

/// Closed interval for expenditure in US$ (millions)
pub const USD_BOUNDS: (f64, f64) = (0.0, 100_000.0);
/// Closed interval for expenditure as a percentage of GDP
pub const GDP_BOUNDS: (f64, f64) = (0.0, 20.0);
/// Closed interval for the data year
pub const YEAR_BOUNDS: (i32, i32) = (2010, 2030);

/// Prediction request as received from the client.
///
/// Every field is accepted as a JSON number so that range and integrality
/// checks can report field-level errors instead of a generic decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub primary_expenditure_usd: f64,
    pub secondary_expenditure_usd: f64,
    pub tertiary_expenditure_usd: f64,
    pub primary_expenditure_gdp: f64,
    pub secondary_expenditure_gdp: f64,
    pub tertiary_expenditure_gdp: f64,
    pub year: f64,
}

/// A request that passed validation. Only the request validator can build one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest {
    primary_usd: f64,
    secondary_usd: f64,
    tertiary_usd: f64,
    primary_gdp: f64,
    secondary_gdp: f64,
    tertiary_gdp: f64,
    year: i32,
}

impl ValidatedRequest {
    pub(crate) fn new(raw: &PredictionRequest, year: i32) -> Self {
        Self {
            primary_usd: raw.primary_expenditure_usd,
            secondary_usd: raw.secondary_expenditure_usd,
            tertiary_usd: raw.tertiary_expenditure_usd,
            primary_gdp: raw.primary_expenditure_gdp,
            secondary_gdp: raw.secondary_expenditure_gdp,
            tertiary_gdp: raw.tertiary_expenditure_gdp,
            year,
        }
    }

    pub fn primary_usd(&self) -> f64 {
        self.primary_usd
    }

    pub fn secondary_usd(&self) -> f64 {
        self.secondary_usd
    }

    pub fn tertiary_usd(&self) -> f64 {
        self.tertiary_usd
    }

    pub fn primary_gdp(&self) -> f64 {
        self.primary_gdp
    }

    pub fn secondary_gdp(&self) -> f64 {
        self.secondary_gdp
    }

    pub fn tertiary_gdp(&self) -> f64 {
        self.tertiary_gdp
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Sum of the three raw US$ expenditure fields
    pub fn total_expenditure(&self) -> f64 {
        self.primary_usd + self.secondary_usd + self.tertiary_usd
    }

    /// Sum of the three raw GDP-percentage fields
    pub fn total_gdp_percentage(&self) -> f64 {
        self.primary_gdp + self.secondary_gdp + self.tertiary_gdp
    }
}
