//! Prometheus metrics definitions for the prediction service
//!
//! All metrics use the `edupredict_` prefix.

use crate::domain::prediction::ConfidenceLevel;
use prometheus::{
    CounterVec, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge},
};
use std::sync::Arc;

/// Prometheus metrics for the prediction service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Prediction requests by outcome
    pub predictions_total: CounterVec,
    /// Successful predictions by confidence label
    pub confidence_total: CounterVec,
    /// End-to-end /predict latency in seconds
    pub prediction_latency_seconds: Histogram,
    /// Model load status (0=unavailable, 1=loaded)
    pub model_loaded: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new(
                "edupredict_predictions_total",
                "Total prediction requests by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let confidence_total = CounterVec::new(
            Opts::new(
                "edupredict_confidence_total",
                "Successful predictions by confidence label",
            ),
            &["level"],
        )?;
        registry.register(Box::new(confidence_total.clone()))?;

        let prediction_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "edupredict_prediction_latency_seconds",
                "Prediction request latency in seconds",
            )
            .buckets(vec![
                0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 1.0,
            ]),
        )?;
        registry.register(Box::new(prediction_latency_seconds.clone()))?;

        let model_loaded = Gauge::with_opts(Opts::new(
            "edupredict_model_loaded",
            "Model load status (0=unavailable, 1=loaded)",
        ))?;
        registry.register(Box::new(model_loaded.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            confidence_total,
            prediction_latency_seconds,
            model_loaded,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    pub fn set_model_loaded(&self, loaded: bool) {
        self.model_loaded.set(if loaded { 1.0 } else { 0.0 });
    }

    /// Increment the outcome counter
    pub fn inc_outcome(&self, outcome: &str) {
        self.predictions_total.with_label_values(&[outcome]).inc();
    }

    /// Increment the confidence counter
    pub fn inc_confidence(&self, level: ConfidenceLevel) {
        self.confidence_total
            .with_label_values(&[level.as_str()])
            .inc();
    }
}
