use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Artifact shipped alongside the app by the training job.
pub const DEFAULT_MODEL_PATH: &str = "model-reg-67130700364.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelFormat {
    /// Plain JSON coefficients + intercept
    #[default]
    Linear,
    /// serde_json dump of a smartcore LinearRegression
    SmartCore,
}

impl FromStr for ModelFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(ModelFormat::Linear),
            "smartcore" => Ok(ModelFormat::SmartCore),
            _ => anyhow::bail!(
                "Invalid MODEL_FORMAT: {}. Must be 'linear' or 'smartcore'",
                s
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub model_format: ModelFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            model_format: ModelFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        let model_format = match env::var("MODEL_FORMAT") {
            Ok(raw) => ModelFormat::from_str(&raw)?,
            Err(_) => ModelFormat::default(),
        };

        Ok(Self {
            model_path,
            model_format,
        })
    }
}
