use super::loader::ModelDecoder;
use super::predictor::SalesPredictor;
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::{FeatureRecord, LinearModel};
use std::sync::Arc;

pub struct LinearPredictor {
    model: LinearModel,
}

impl LinearPredictor {
    pub fn new(model: LinearModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }
}

impl SalesPredictor for LinearPredictor {
    fn predict(&self, features: &FeatureRecord) -> Result<f64, PredictionError> {
        self.model.predict(features)
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

/// Decodes the plain JSON coefficient artifact.
pub struct LinearDecoder;

impl ModelDecoder for LinearDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Arc<dyn SalesPredictor>, ModelError> {
        let model: LinearModel =
            serde_json::from_slice(bytes).map_err(|e| ModelError::Corrupt {
                reason: e.to_string(),
            })?;
        Ok(Arc::new(LinearPredictor::new(model)))
    }
}
