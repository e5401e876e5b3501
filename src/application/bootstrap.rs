use crate::application::ml::loader::Slot;
use crate::application::ml::{ModelLoader, SalesPredictor};
use crate::config::Config;
use crate::domain::errors::ModelError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// What the UI can offer, decided once at startup
pub enum ModelAvailability {
    Ready(Arc<dyn SalesPredictor>),
    Missing { path: PathBuf },
    Corrupt { path: PathBuf, reason: String },
}

impl ModelAvailability {
    pub fn from_load(path: PathBuf, loaded: Result<Slot, ModelError>) -> Self {
        match loaded {
            Ok(Some(predictor)) => ModelAvailability::Ready(predictor),
            Ok(None) => ModelAvailability::Missing { path },
            Err(e) => ModelAvailability::Corrupt {
                path,
                reason: e.to_string(),
            },
        }
    }

    pub fn predictor(&self) -> Option<Arc<dyn SalesPredictor>> {
        match self {
            ModelAvailability::Ready(predictor) => Some(predictor.clone()),
            _ => None,
        }
    }

    /// Blocking message shown instead of the form
    pub fn unavailable_message(&self) -> Option<String> {
        match self {
            ModelAvailability::Ready(_) => None,
            ModelAvailability::Missing { path } => Some(format!(
                "Model not found! Please make sure the model file ({}) is in the working directory. \
                 You may need to run the model training script first.",
                path.display()
            )),
            ModelAvailability::Corrupt { path, reason } => Some(format!(
                "Model could not be loaded! The model file ({}) is unreadable: {}",
                path.display(),
                reason
            )),
        }
    }
}

/// Build the predictor named by the config. Never fails: problems become a non-ready availability.
pub fn load_model(config: &Config) -> ModelAvailability {
    info!(
        "Loading model: Path={:?}, Format={:?}",
        config.model_path, config.model_format
    );
    let loader = ModelLoader::for_format(config.model_format);
    let loaded = loader.load(&config.model_path);
    ModelAvailability::from_load(config.model_path.clone(), loaded)
}
