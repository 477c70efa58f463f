//! Observability for the prediction service
//!
//! 1. **Structured logs** via `tracing` (see [`logging`])
//! 2. **Prometheus metrics**, rendered on `GET /metrics`

pub mod latency_tracker;
pub mod logging;
pub mod metrics;

pub use latency_tracker::PredictionTimer;
pub use metrics::Metrics;
