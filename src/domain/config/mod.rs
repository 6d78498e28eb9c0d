//! Configuration domain module
//!
//! Value objects for the insight pipeline parameters, independent of where
//! they are loaded from (environment, TOML file or code).

pub mod insight_config;

pub use insight_config::{
    AlertThresholds, AnalysisConfig, IndicatorConfig, InsightConfig, InsightConfigError,
    SignalThresholds,
};
