pub mod linear_predictor;
pub mod model_loader;
#[cfg(feature = "onnx")]
pub mod onnx_predictor;
pub mod predictor;
pub mod smartcore_predictor;

pub use linear_predictor::{LinearModelArtifact, LinearPredictor};
pub use model_loader::{ModelFormat, ModelLoader};
pub use predictor::RegressionModel;
pub use smartcore_predictor::SmartCorePredictor;
