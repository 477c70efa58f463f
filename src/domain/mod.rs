// Feature engineering shared with the training pipeline
pub mod ml;

// Request, confidence and response types
pub mod prediction;

// Input validation
pub mod validation;

// Domain-specific error types
pub mod errors;
