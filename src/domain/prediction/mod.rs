pub mod confidence;
pub mod request;
pub mod response;

pub use confidence::ConfidenceLevel;
pub use request::{PredictionRequest, ValidatedRequest};
pub use response::PredictionResponse;
