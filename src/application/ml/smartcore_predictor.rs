use super::loader::ModelDecoder;
use super::predictor::SalesPredictor;
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::FeatureRecord;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::sync::Arc;

pub type SmartCoreRegression = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

pub struct SmartCorePredictor {
    model: SmartCoreRegression,
}

impl SmartCorePredictor {
    pub fn new(model: SmartCoreRegression) -> Self {
        Self { model }
    }
}

impl SalesPredictor for SmartCorePredictor {
    fn predict(&self, features: &FeatureRecord) -> Result<f64, PredictionError> {
        let input_vec = features.to_f64_vector();
        let input_matrix =
            DenseMatrix::from_2d_vec(&vec![input_vec]).map_err(|e| PredictionError::Model {
                reason: format!("Matrix creation failed: {}", e),
            })?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| PredictionError::Model {
                reason: format!("Prediction failed: {}", e),
            })?;

        match predictions.first() {
            Some(pred) if pred.is_finite() => Ok(*pred),
            Some(pred) => Err(PredictionError::NonFinite { value: *pred }),
            None => Err(PredictionError::Model {
                reason: "No prediction returned".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "SmartCore Linear Regression"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

/// Decodes a smartcore model serialized with serde_json.
pub struct SmartCoreDecoder;

impl ModelDecoder for SmartCoreDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Arc<dyn SalesPredictor>, ModelError> {
        let model: SmartCoreRegression =
            serde_json::from_slice(bytes).map_err(|e| ModelError::Corrupt {
                reason: format!("Failed to deserialize smartcore model: {}", e),
            })?;
        Ok(Arc::new(SmartCorePredictor::new(model)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linear::linear_regression::LinearRegressionParameters;

    // sales = 3 + 0.05*youtube + 0.2*tiktok + 0.01*instagram
    fn fitted() -> SmartCoreRegression {
        let rows = vec![
            vec![230.1, 37.8, 69.2],
            vec![44.5, 39.3, 45.1],
            vec![17.2, 45.9, 69.3],
            vec![151.5, 41.3, 58.5],
            vec![180.8, 10.8, 58.4],
            vec![8.7, 48.9, 75.0],
            vec![57.5, 32.8, 23.5],
            vec![120.2, 19.6, 11.6],
        ];
        let y: Vec<f64> = rows
            .iter()
            .map(|r| 3.0 + 0.05 * r[0] + 0.2 * r[1] + 0.01 * r[2])
            .collect();
        let x = DenseMatrix::from_2d_vec(&rows).unwrap();
        LinearRegression::fit(&x, &y, LinearRegressionParameters::default()).unwrap()
    }

    #[test]
    fn test_serialized_model_round_trips_through_decoder() {
        let bytes = serde_json::to_vec(&fitted()).unwrap();
        let predictor = SmartCoreDecoder.decode(&bytes).unwrap();

        let sales = predictor
            .predict(&FeatureRecord::new(150.0, 40.0, 60.0))
            .unwrap();

        // 3 + 7.5 + 8 + 0.6
        assert!((sales - 19.1).abs() < 1e-6);
    }

    #[test]
    fn test_linear_artifact_is_not_a_smartcore_model() {
        let json = br#"{ "coefficients": [1.0, 2.0, 3.0], "intercept": 0.0 }"#;
        assert!(SmartCoreDecoder.decode(json).is_err());
    }
}
