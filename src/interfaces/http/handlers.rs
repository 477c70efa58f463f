use super::AppState;
use super::error::ApiError;
use crate::application::prediction_service::ModelInfo;
use crate::domain::prediction::{PredictionRequest, PredictionResponse};
use crate::infrastructure::observability::PredictionTimer;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

pub const SERVICE_NAME: &str = "Education Prediction API";

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub predict: &'static str,
    pub health: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<&'static str>,
}

/// Static service descriptor returned by `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelInfo>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub timestamp: String,
}

pub async fn root(State(state): State<AppState>) -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        message: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            predict: "/predict",
            health: "/health",
            metrics: state.metrics.as_ref().map(|_| "/metrics"),
        },
        model: state.service.model_info(),
    })
}

/// Liveness plus model status. Always 200: a missing model is reported, not fatal.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.service.is_model_loaded(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let timer = state.metrics.as_ref().map(PredictionTimer::start);

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            if let Some(timer) = &timer {
                timer.record_outcome("validation_error");
            }
            return Err(ApiError::InvalidBody(rejection.body_text()));
        }
    };

    let result = state.service.predict(&request).await;
    if let Some(timer) = &timer {
        timer.record(&result);
    }

    match result {
        Ok(response) => {
            info!(
                "Prediction {} ({})",
                response.prediction, response.confidence
            );
            Ok(Json(response))
        }
        Err(e) => {
            warn!("Prediction failed [{}]: {}", e.outcome(), e);
            Err(ApiError::from(e))
        }
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(metrics) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            metrics.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
