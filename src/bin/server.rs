//! Education Prediction API server
//!
//! Serves school-life-expectancy predictions over HTTP. The model artifact is
//! loaded once at startup; if loading fails the server still starts and
//! reports `model_loaded: false` on `/health`.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=models/education_prediction_model.json cargo run --bin server
//! cargo run --bin server -- --port 9000 --model-format smartcore
//! ```
//!
//! # Environment Variables
//! - `HOST` / `PORT` - Bind address (default: 0.0.0.0:8000)
//! - `MODEL_PATH` / `MODEL_FORMAT` - Artifact location and format (default: linear JSON)
//! - `REQUEST_TIMEOUT_MS` - Per-prediction timeout (default: 5000)
//! - `CORS_ALLOWED_ORIGINS` / `CORS_ALLOW_CREDENTIALS` - CORS policy (default: open)
//! - `METRICS_ENABLED` - Expose `/metrics` (default: true)

use anyhow::{Context, Result};
use clap::Parser;
use edupredict::application::PredictionService;
use edupredict::application::ml::ModelFormat;
use edupredict::config::Config;
use edupredict::infrastructure::observability::{Metrics, logging};
use edupredict::interfaces::http::shutdown::shutdown_signal;
use edupredict::interfaces::http::{AppState, build_router};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the model artifact (overrides MODEL_PATH)
    #[arg(long)]
    model_path: Option<PathBuf>,

    /// Artifact format: linear, smartcore or onnx (overrides MODEL_FORMAT)
    #[arg(long)]
    model_format: Option<ModelFormat>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    logging::init_tracing();

    let args = Args::parse();

    info!("Education Prediction API {} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = args.model_path {
        config.model.path = path;
    }
    if let Some(format) = args.model_format {
        config.model.format = format;
    }
    info!(
        "Configuration loaded: Bind={}:{}, Model={:?} ({}), Timeout={}ms, CORS={:?}",
        config.server.host,
        config.server.port,
        config.model.path,
        config.model.format,
        config.server.request_timeout_ms,
        config.cors.allowed_origins
    );

    let service = PredictionService::initialize(
        config.model.format,
        &config.model.path,
        config.server.request_timeout(),
    );
    if !service.is_model_loaded() {
        warn!("Running DEGRADED: /predict will fail until restarted with a valid model");
    }

    let metrics = if config.observability.metrics_enabled {
        Some(Metrics::new()?)
    } else {
        info!("Metrics endpoint disabled.");
        None
    };

    let app = build_router(AppState::new(service, metrics), &config.cors)?;

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}
