use crate::domain::errors::{ServiceError, ValidationErrors};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// One entry of a 422 `detail` list
#[derive(Debug, Serialize)]
pub struct FieldErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    detail: Vec<FieldErrorDetail>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Errors returned by HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be decoded as a prediction request
    InvalidBody(String),
    Service(ServiceError),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError::Service(e)
    }
}

fn validation_details(errors: &ValidationErrors) -> Vec<FieldErrorDetail> {
    errors
        .errors()
        .iter()
        .map(|e| FieldErrorDetail {
            loc: vec!["body".to_string(), e.field().to_string()],
            msg: e.to_string(),
            kind: e.kind().to_string(),
        })
        .collect()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody(msg) => {
                let body = ValidationBody {
                    detail: vec![FieldErrorDetail {
                        loc: vec!["body".to_string()],
                        msg,
                        kind: "value_error.jsondecode".to_string(),
                    }],
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Service(ServiceError::Validation(errors)) => {
                let body = ValidationBody {
                    detail: validation_details(&errors),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Service(e) => {
                let body = ErrorBody {
                    detail: format!("Prediction error: {}", e),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
