use sales_predictor::application::bootstrap::{self, ModelAvailability};
use sales_predictor::application::forecast::{FormState, PredictionForm};
use sales_predictor::application::ml::{ModelDecoder, ModelLoader, SalesPredictor};
use sales_predictor::config::{Config, ModelFormat};
use sales_predictor::domain::errors::{ModelError, PredictionError};
use sales_predictor::domain::ml::{FeatureRecord, LinearModel};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn write_artifact(contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sales-model-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).expect("Failed to write artifact");
    path
}

fn config_for(path: PathBuf, format: ModelFormat) -> Config {
    Config {
        model_path: path,
        model_format: format,
    }
}

#[test]
fn test_linear_artifact_end_to_end() {
    let model = LinearModel::new(vec![0.045, 0.19, 0.002], 2.9);
    let path = write_artifact(&serde_json::to_vec(&model).unwrap());

    let availability = bootstrap::load_model(&config_for(path.clone(), ModelFormat::Linear));
    let predictor = availability.predictor().expect("model should be ready");

    let mut form = PredictionForm::new(predictor);
    let resolution = form.submit();

    // 2.9 + 6.75 + 7.6 + 0.12 = 17.37
    assert_eq!(resolution.metric_value().as_deref(), Some("$17.37 K"));
    assert!(resolution.error_message().is_none());

    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_missing_artifact_suppresses_form() {
    let path = std::env::temp_dir().join(format!("absent-{}.json", uuid::Uuid::new_v4()));

    let availability = bootstrap::load_model(&config_for(path, ModelFormat::Linear));

    assert!(matches!(availability, ModelAvailability::Missing { .. }));
    assert!(availability.predictor().is_none());
    assert!(
        availability
            .unavailable_message()
            .unwrap()
            .contains("Model not found!")
    );
}

#[test]
fn test_pickle_bytes_are_reported_not_panicked() {
    let path = write_artifact(b"\x80\x04\x95\x00\x00sklearn.linear_model");

    let availability = bootstrap::load_model(&config_for(path.clone(), ModelFormat::Linear));

    assert!(matches!(availability, ModelAvailability::Corrupt { .. }));
    assert!(availability.predictor().is_none());

    std::fs::remove_file(path).unwrap();
}

struct CountingDecoder {
    decodes: Arc<AtomicUsize>,
}

impl ModelDecoder for CountingDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Arc<dyn SalesPredictor>, ModelError> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        let model: LinearModel = serde_json::from_slice(bytes).map_err(|e| ModelError::Corrupt {
            reason: e.to_string(),
        })?;
        Ok(Arc::new(sales_predictor::application::ml::LinearPredictor::new(model)))
    }
}

#[test]
fn test_many_submissions_decode_once() {
    let model = LinearModel::new(vec![1.0, 1.0, 1.0], 0.0);
    let path = write_artifact(&serde_json::to_vec(&model).unwrap());
    let decodes = Arc::new(AtomicUsize::new(0));
    let loader = ModelLoader::new(Box::new(CountingDecoder {
        decodes: decodes.clone(),
    }));

    let predictor = loader.load(&path).unwrap().unwrap();
    let mut form = PredictionForm::new(predictor);
    for i in 0..25 {
        form.set_budgets(i as f64, 0.0, 0.0);
        assert!(form.submit().is_success());
        // Asking the loader again hands back the cached handle
        assert!(loader.load(&path).unwrap().is_some());
    }

    assert_eq!(form.submissions(), 25);
    assert_eq!(decodes.load(Ordering::SeqCst), 1);

    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_model_trained_on_other_feature_names_fails_per_submission() {
    let json = br#"{
        "feature_names": ["TV", "radio", "newspaper"],
        "coefficients": [0.045, 0.19, 0.002],
        "intercept": 2.9
    }"#;
    let path = write_artifact(json);

    let availability = bootstrap::load_model(&config_for(path.clone(), ModelFormat::Linear));
    let mut form = PredictionForm::new(availability.predictor().unwrap());

    let first = form.submit();
    let message = first.error_message().unwrap();
    assert!(message.starts_with("An error occurred during prediction:"));
    assert!(message.contains("TV"));

    // Still accepting submissions afterwards
    form.set_budgets(1.0, 2.0, 3.0);
    let second = form.submit();
    assert!(matches!(
        second,
        sales_predictor::application::forecast::Resolution::Failure {
            error: PredictionError::FeatureMismatch { .. }
        }
    ));
    assert!(matches!(form.state(), FormState::Resolved(_)));

    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_shared_handle_across_threads() {
    let model = LinearModel::new(vec![0.05, 0.1, 0.01], 3.0);
    let path = write_artifact(&serde_json::to_vec(&model).unwrap());
    let predictor = ModelLoader::for_format(ModelFormat::Linear)
        .load(&path)
        .unwrap()
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let predictor = predictor.clone();
            std::thread::spawn(move || {
                predictor
                    .predict(&FeatureRecord::new(100.0 * i as f64, 0.0, 0.0))
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, sales) in results.iter().enumerate() {
        assert!((sales - (3.0 + 5.0 * i as f64)).abs() < 1e-9);
    }

    std::fs::remove_file(path).unwrap();
}
