//! Derived views over an augmented series: statistics, signals, trend,
//! key levels, risk metrics and alerts.

pub mod alert_engine;
pub mod key_levels;
pub mod risk_metrics;
pub mod signal_generator;
pub mod statistics_generator;
pub mod trend_analyzer;

pub use alert_engine::{AlertEngine, AlertInputs};
pub use key_levels::KeyLevelIdentifier;
pub use risk_metrics::RiskMetricsCalculator;
pub use signal_generator::{SignalGenerator, SignalRule};
pub use statistics_generator::StatisticsGenerator;
pub use trend_analyzer::TrendAnalyzer;
