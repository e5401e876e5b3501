// Regression inputs and artifacts
pub mod ml;

// Domain-specific error types
pub mod errors;
