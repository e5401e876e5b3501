// Startup wiring
pub mod bootstrap;

// Budget form and result presentation
pub mod forecast;

// Predictor interface, implementations and artifact loading
pub mod ml;
