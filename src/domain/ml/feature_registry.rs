use crate::domain::prediction::request::ValidatedRequest;

/// Ordered list of feature names.
/// This order MUST match exactly with the column order used when the model was trained.
/// Any change here is a breaking change for every model artifact.
pub const FEATURE_NAMES: &[&str] = &[
    "Government expenditure on primary education, US$ (millions)",
    "Government expenditure on secondary education, US$ (millions)",
    "Government expenditure on tertiary education, US$ (millions)",
    "Government expenditure on primary education as a percentage of GDP (%)",
    "Government expenditure on secondary education as a percentage of GDP (%)",
    "Government expenditure on tertiary education as a percentage of GDP (%)",
    "Year",
    "Total_education_expenditure",
    "Total_education_GDP_percentage",
    "Tertiary_primary_ratio",
];

pub const FEATURE_COUNT: usize = 10;

pub const YEAR_INDEX: usize = 6;
pub const TOTAL_EXPENDITURE_INDEX: usize = 7;
pub const TOTAL_GDP_INDEX: usize = 8;
pub const TERTIARY_PRIMARY_RATIO_INDEX: usize = 9;

/// Model input in training column order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Derive the full feature vector from a validated request.
    pub fn from_request(request: &ValidatedRequest) -> Self {
        let primary_usd = request.primary_usd();
        let tertiary_usd = request.tertiary_usd();

        Self([
            primary_usd,
            request.secondary_usd(),
            tertiary_usd,
            request.primary_gdp(),
            request.secondary_gdp(),
            request.tertiary_gdp(),
            f64::from(request.year()),
            request.total_expenditure(),
            request.total_gdp_percentage(),
            tertiary_primary_ratio(tertiary_usd, primary_usd),
        ])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    /// Single-precision copy for backends that take f32 tensors (ONNX).
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.0.iter().map(|v| *v as f32).collect()
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Tertiary spend relative to primary spend. The `+ 1` keeps the
/// denominator positive for primary_usd = 0 and must stay as-is: the
/// trained model saw exactly this transform.
pub fn tertiary_primary_ratio(tertiary_usd: f64, primary_usd: f64) -> f64 {
    tertiary_usd / (primary_usd + 1.0)
}

/// Check that an artifact's column names match the registry, in order.
/// Returns the first mismatching index with both names.
pub fn check_feature_order(names: &[String]) -> Result<(), (usize, String, String)> {
    for (index, expected) in FEATURE_NAMES.iter().enumerate() {
        match names.get(index) {
            Some(actual) if actual == expected => {}
            Some(actual) => return Err((index, expected.to_string(), actual.clone())),
            None => return Err((index, expected.to_string(), "<missing>".to_string())),
        }
    }
    if let Some(extra) = names.get(FEATURE_NAMES.len()) {
        return Err((FEATURE_NAMES.len(), "<end>".to_string(), extra.clone()));
    }
    Ok(())
}
