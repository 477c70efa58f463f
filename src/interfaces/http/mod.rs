//! HTTP surface of the prediction service.
//!
//! | route | handler |
//! |---|---|
//! | `GET /` | [`handlers::root`] |
//! | `GET /health` | [`handlers::health`] |
//! | `POST /predict` | [`handlers::predict`] |
//! | `GET /metrics` | [`handlers::metrics`] (only when metrics are enabled) |

pub mod cors;
pub mod error;
pub mod handlers;
pub mod shutdown;

use crate::application::PredictionService;
use crate::config::CorsEnvConfig;
use crate::infrastructure::observability::Metrics;
use anyhow::Result;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
    pub metrics: Option<Metrics>,
}

impl AppState {
    pub fn new(service: PredictionService, metrics: Option<Metrics>) -> Self {
        if let Some(metrics) = &metrics {
            metrics.set_model_loaded(service.is_model_loaded());
        }
        Self {
            service: Arc::new(service),
            metrics,
        }
    }
}

pub fn build_router(state: AppState, cors: &CorsEnvConfig) -> Result<Router> {
    let mut router: Router<AppState> = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict));

    if state.metrics.is_some() {
        router = router.route("/metrics", get(handlers::metrics));
    }

    Ok(router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(cors)?))
}
