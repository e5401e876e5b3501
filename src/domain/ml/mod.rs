pub mod feature_registry;
pub mod linear_model;

pub use feature_registry::{FEATURE_NAMES, FeatureRecord};
pub use linear_model::LinearModel;
