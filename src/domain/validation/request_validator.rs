use crate::domain::errors::{ValidationError, ValidationErrors};
use crate::domain::prediction::request::{
    GDP_BOUNDS, PredictionRequest, USD_BOUNDS, ValidatedRequest, YEAR_BOUNDS, fields,
};
use tracing::warn;

/// Centralized validator for prediction input.
///
/// Rejects out-of-range values instead of clamping them. Every field is
/// checked so the client sees all violations at once.
pub struct RequestValidator;

impl RequestValidator {
    pub fn validate(request: &PredictionRequest) -> Result<ValidatedRequest, ValidationErrors> {
        let mut errors = Vec::new();

        let (usd_min, usd_max) = USD_BOUNDS;
        let (gdp_min, gdp_max) = GDP_BOUNDS;
        Self::check_range(
            fields::PRIMARY_USD,
            request.primary_expenditure_usd,
            usd_min,
            usd_max,
            &mut errors,
        );
        Self::check_range(
            fields::SECONDARY_USD,
            request.secondary_expenditure_usd,
            usd_min,
            usd_max,
            &mut errors,
        );
        Self::check_range(
            fields::TERTIARY_USD,
            request.tertiary_expenditure_usd,
            usd_min,
            usd_max,
            &mut errors,
        );
        Self::check_range(
            fields::PRIMARY_GDP,
            request.primary_expenditure_gdp,
            gdp_min,
            gdp_max,
            &mut errors,
        );
        Self::check_range(
            fields::SECONDARY_GDP,
            request.secondary_expenditure_gdp,
            gdp_min,
            gdp_max,
            &mut errors,
        );
        Self::check_range(
            fields::TERTIARY_GDP,
            request.tertiary_expenditure_gdp,
            gdp_min,
            gdp_max,
            &mut errors,
        );

        let year = Self::check_year(request.year, &mut errors);

        match year {
            Some(year) if errors.is_empty() => Ok(ValidatedRequest::new(request, year)),
            _ => {
                warn!(
                    "Validation FAILED: {} field(s) rejected: {:?}",
                    errors.len(),
                    errors.iter().map(|e| e.field()).collect::<Vec<_>>()
                );
                Err(ValidationErrors::new(errors))
            }
        }
    }

    fn check_range(
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
        errors: &mut Vec<ValidationError>,
    ) -> bool {
        if !value.is_finite() {
            errors.push(ValidationError::NotFinite { field });
            return false;
        }
        if value < min {
            errors.push(ValidationError::BelowMinimum { field, value, min });
            return false;
        }
        if value > max {
            errors.push(ValidationError::AboveMaximum { field, value, max });
            return false;
        }
        true
    }

    fn check_year(value: f64, errors: &mut Vec<ValidationError>) -> Option<i32> {
        let (min, max) = YEAR_BOUNDS;
        if !Self::check_range(fields::YEAR, value, min as f64, max as f64, errors) {
            return None;
        }
        if value.fract() != 0.0 {
            errors.push(ValidationError::NotWholeNumber {
                field: fields::YEAR,
                value,
            });
            return None;
        }
        // In range and integral, so the cast is exact
        Some(value as i32)
    }
}
