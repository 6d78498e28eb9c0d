use super::alert::Alert;
use super::types::{KeyLevels, RiskMetrics, Statistics, TrendAnalysis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a report carries computed sections or is an explicit "no data" report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReportStatus {
    Complete,
    Empty { reason: String },
}

/// Immutable snapshot of the analysis of one series.
///
/// A report is identified only by `(symbol, period, generated_at)`; it is built
/// fresh for every call and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub symbol: String,
    pub period: String,
    pub generated_at: DateTime<Utc>,
    pub status: ReportStatus,
    pub statistics: Option<Statistics>,
    pub signals: Vec<String>,
    pub key_levels: KeyLevels,
    pub trend_analysis: TrendAnalysis,
    pub risk_metrics: RiskMetrics,
    pub alerts: Vec<Alert>,
}

impl InsightReport {
    /// A report with every section absent, for empty or rejected input.
    pub fn empty(
        symbol: impl Into<String>,
        period: impl Into<String>,
        generated_at: DateTime<Utc>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            period: period.into(),
            generated_at,
            status: ReportStatus::Empty {
                reason: reason.into(),
            },
            statistics: None,
            signals: Vec::new(),
            key_levels: KeyLevels::default(),
            trend_analysis: TrendAnalysis::default(),
            risk_metrics: RiskMetrics::default(),
            alerts: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.status, ReportStatus::Empty { .. })
    }

    pub fn alert_messages(&self) -> Vec<&str> {
        self.alerts.iter().map(|a| a.message.as_str()).collect()
    }
}
