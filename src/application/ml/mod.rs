pub mod linear_predictor;
pub mod loader;
pub mod predictor;
pub mod smartcore_predictor;

pub use linear_predictor::LinearPredictor;
pub use loader::{ModelDecoder, ModelLoader};
pub use predictor::SalesPredictor;
pub use smartcore_predictor::SmartCorePredictor;
