use crate::config::{Config, DEFAULT_MODEL_PATH, ModelFormat};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

// set_var/remove_var are unsafe in edition 2024; the lock above keeps them single-threaded.
fn set(key: &str, value: &str) {
    unsafe { env::set_var(key, value) }
}

fn unset(key: &str) {
    unsafe { env::remove_var(key) }
}

#[test]
fn test_config_defaults_match_shipped_artifact() {
    let _guard = get_env_lock().lock().unwrap();
    unset("MODEL_PATH");
    unset("MODEL_FORMAT");

    let config = Config::from_env().unwrap();

    assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert_eq!(config.model_format, ModelFormat::Linear);
}

#[test]
fn test_config_overrides_from_env() {
    let _guard = get_env_lock().lock().unwrap();
    set("MODEL_PATH", "/opt/models/ads.json");
    set("MODEL_FORMAT", "SmartCore");

    let config = Config::from_env().unwrap();

    assert_eq!(config.model_path, PathBuf::from("/opt/models/ads.json"));
    assert_eq!(config.model_format, ModelFormat::SmartCore);

    unset("MODEL_PATH");
    unset("MODEL_FORMAT");
}

#[test]
fn test_config_rejects_unknown_format() {
    let _guard = get_env_lock().lock().unwrap();
    set("MODEL_FORMAT", "pickle");

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("pickle"));

    unset("MODEL_FORMAT");
}

#[test]
fn test_model_format_parsing() {
    assert_eq!(ModelFormat::from_str(" linear ").unwrap(), ModelFormat::Linear);
    assert_eq!(
        ModelFormat::from_str("SMARTCORE").unwrap(),
        ModelFormat::SmartCore
    );
    assert!(ModelFormat::from_str("onnx").is_err());
}
