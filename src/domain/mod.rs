// Return and distribution statistics
pub mod analytics;

// Pipeline parameters
pub mod config;

// Domain-specific error types
pub mod errors;

// Insight report model
pub mod insights;

// Series model
pub mod market;

// Port interfaces
pub mod ports;
