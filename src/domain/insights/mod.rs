// Insight report model
pub mod alert;
pub mod report;
pub mod types;

pub use alert::{Alert, AlertKind};
pub use report::{InsightReport, ReportStatus};
pub use types::{
    HorizonChange, KeyLevels, PriceChanges, ReturnDistribution, RiskMetrics, Statistics,
    TrendAnalysis, TrendDirection, TrendStrength, VolumeAnalysis,
};
