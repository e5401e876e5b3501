use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::{FEATURE_NAMES, FeatureRecord};
use serde::{Deserialize, Serialize};

/// Ordinary least squares fit, as exported by the training job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Column names the model was fitted on. Empty when the exporter didn't record them.
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            coefficients,
            intercept,
        }
    }

    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        let columns = record.columns();

        if self.coefficients.len() != columns.len() {
            return Err(PredictionError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: columns.len(),
            });
        }

        if !self.feature_names.is_empty()
            && !self
                .feature_names
                .iter()
                .map(String::as_str)
                .eq(columns.iter().map(|(name, _)| *name))
        {
            return Err(PredictionError::FeatureMismatch {
                expected: self.feature_names.clone(),
                actual: columns.iter().map(|(name, _)| name.to_string()).collect(),
            });
        }

        let value = self.intercept
            + self
                .coefficients
                .iter()
                .zip(columns.iter())
                .map(|(coef, (_, x))| coef * x)
                .sum::<f64>();

        if !value.is_finite() {
            return Err(PredictionError::NonFinite { value });
        }

        Ok(value)
    }
}
