use super::metrics::Metrics;
use crate::domain::errors::ServiceError;
use crate::domain::prediction::PredictionResponse;
use std::time::Instant;

/// Times one /predict call and records its outcome when finished.
///
/// Latency is observed on drop, so early returns are still counted.
pub struct PredictionTimer<'a> {
    start: Instant,
    metrics: &'a Metrics,
}

impl<'a> PredictionTimer<'a> {
    pub fn start(metrics: &'a Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Record the outcome counters for a finished prediction
    pub fn record(&self, result: &Result<PredictionResponse, ServiceError>) {
        match result {
            Ok(response) => {
                self.metrics.inc_outcome("success");
                self.metrics.inc_confidence(response.confidence);
            }
            Err(e) => self.record_outcome(e.outcome()),
        }
    }

    /// Record a failure that happened before the request reached the service
    pub fn record_outcome(&self, outcome: &str) {
        self.metrics.inc_outcome(outcome);
    }
}

impl Drop for PredictionTimer<'_> {
    fn drop(&mut self) {
        self.metrics
            .prediction_latency_seconds
            .observe(self.start.elapsed().as_secs_f64());
    }
}
