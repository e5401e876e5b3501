use crate::domain::errors::PredictionError;
use crate::domain::ml::FeatureRecord;

/// Interface for sales regression models
pub trait SalesPredictor: Send + Sync {
    /// Estimated sales (in thousands) for one set of budgets
    fn predict(&self, features: &FeatureRecord) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
