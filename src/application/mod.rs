// Model backends and loading
pub mod ml;

// Request pipeline: validate, derive, predict, classify
pub mod prediction_service;

pub use prediction_service::PredictionService;
