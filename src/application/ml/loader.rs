//! Model artifact loader
//!
//! Reads an artifact from disk once per path and hands out the same shared
//! predictor for every later request. A missing file is not an error: it
//! resolves to `None` so callers can degrade instead of failing.

use super::linear_predictor::LinearDecoder;
use super::predictor::SalesPredictor;
use super::smartcore_predictor::SmartCoreDecoder;
use crate::config::ModelFormat;
use crate::domain::errors::ModelError;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// Turns raw artifact bytes into a predictor
pub trait ModelDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Arc<dyn SalesPredictor>, ModelError>;
}

pub fn decoder_for(format: ModelFormat) -> Box<dyn ModelDecoder> {
    match format {
        ModelFormat::Linear => Box::new(LinearDecoder),
        ModelFormat::SmartCore => Box::new(SmartCoreDecoder),
    }
}

/// A loaded predictor, or `None` when the artifact does not exist
pub type Slot = Option<Arc<dyn SalesPredictor>>;

pub struct ModelLoader {
    decoder: Box<dyn ModelDecoder>,
    // Never evicted: an entry lives as long as the loader.
    loaded: Mutex<HashMap<PathBuf, Slot>>,
}

impl ModelLoader {
    pub fn new(decoder: Box<dyn ModelDecoder>) -> Self {
        Self {
            decoder,
            loaded: Mutex::new(HashMap::new()),
        }
    }

    pub fn for_format(format: ModelFormat) -> Self {
        Self::new(decoder_for(format))
    }

    /// Load the predictor stored at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist. Successful loads and
    /// absences are remembered; decode failures are not.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Slot, ModelError> {
        let path = path.as_ref();
        let mut loaded = self.loaded.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(slot) = loaded.get(path) {
            return Ok(slot.clone());
        }

        let slot = self.read_and_decode(path)?;
        loaded.insert(path.to_path_buf(), slot.clone());
        Ok(slot)
    }

    fn read_and_decode(&self, path: &Path) -> Result<Slot, ModelError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Model file not found at {:?}. Prediction form disabled.", path);
                return Ok(None);
            }
            Err(source) => {
                error!("Failed to read model file {:?}: {}", path, source);
                return Err(ModelError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        match self.decoder.decode(&bytes) {
            Ok(predictor) => {
                info!(
                    model = %predictor.name(),
                    version = %predictor.version(),
                    "Successfully loaded model from {:?}",
                    path
                );
                Ok(Some(predictor))
            }
            Err(e) => {
                error!("Failed to deserialize model {:?}: {}", path, e);
                Err(e)
            }
        }
    }
}
