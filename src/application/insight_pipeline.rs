//! Insight pipeline
//!
//! Sequences indicator augmentation, statistics, signals, key levels, trend,
//! risk metrics and alerts into one [`InsightReport`]. This is the single entry
//! point callers use; the engine holds only immutable configuration, so one
//! instance can be shared across threads.

use crate::application::analysis::{
    AlertEngine, KeyLevelIdentifier, RiskMetricsCalculator, SignalGenerator,
    StatisticsGenerator, TrendAnalyzer,
};
use crate::application::indicators::IndicatorCalculator;
use crate::domain::config::InsightConfig;
use crate::domain::errors::MalformedSeriesError;
use crate::domain::insights::{InsightReport, ReportStatus};
use crate::domain::market::{Bar, Series};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

pub struct InsightEngine {
    config: InsightConfig,
    calculator: IndicatorCalculator,
    alerts: AlertEngine,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new(InsightConfig::default())
    }
}

impl InsightEngine {
    pub fn new(config: InsightConfig) -> Self {
        Self {
            calculator: IndicatorCalculator::new(config.indicators.clone()),
            alerts: AlertEngine::new(config.alerts.clone()),
            config,
        }
    }

    /// Full report for `series`, stamped with the current time.
    pub fn generate_insights(&self, series: &Series) -> InsightReport {
        self.generate_insights_at(series, Utc::now())
    }

    /// Full report for `series` with an explicit generation time.
    ///
    /// Identical inputs give identical reports.
    pub fn generate_insights_at(
        &self,
        series: &Series,
        generated_at: DateTime<Utc>,
    ) -> InsightReport {
        if series.is_empty() {
            info!(
                "InsightEngine: {} ({}) has no bars, returning empty report",
                series.symbol(),
                series.period()
            );
            return InsightReport::empty(
                series.symbol(),
                series.period(),
                generated_at,
                "series contains no bars",
            );
        }

        debug!(
            "InsightEngine: analyzing {} ({}), {} bars",
            series.symbol(),
            series.period(),
            series.len()
        );

        let analysis = &self.config.analysis;
        let augmented = self.calculator.augment(series);
        let statistics = StatisticsGenerator::compute(&augmented, analysis);
        let signals = SignalGenerator::generate(&augmented, &self.config.signals);
        let key_levels = KeyLevelIdentifier::identify(series, analysis.key_level_window);
        let trend_analysis = TrendAnalyzer::analyze(&augmented, analysis);
        let risk_metrics = RiskMetricsCalculator::compute(series, analysis);
        let alerts = self.alerts.evaluate(&augmented, statistics.as_ref());

        info!(
            "InsightEngine: {} ({}) -> {} signals, {} alerts",
            series.symbol(),
            series.period(),
            signals.len(),
            alerts.len()
        );

        InsightReport {
            symbol: series.symbol().to_string(),
            period: series.period().to_string(),
            generated_at,
            status: ReportStatus::Complete,
            statistics,
            signals,
            key_levels,
            trend_analysis,
            risk_metrics,
            alerts,
        }
    }

    /// Validate raw bars and analyze them.
    ///
    /// Invalid input yields an explicitly empty report carrying the validation
    /// message, so consumers can render a "no data" state.
    pub fn generate_insights_from_bars(
        &self,
        symbol: &str,
        period: &str,
        bars: Vec<Bar>,
    ) -> InsightReport {
        match self.try_generate_insights_from_bars(symbol, period, bars) {
            Ok(report) => report,
            Err(e) => {
                warn!("InsightEngine: rejected series for {}: {}", symbol, e);
                InsightReport::empty(symbol, period, Utc::now(), e.to_string())
            }
        }
    }

    /// Like [`generate_insights_from_bars`](Self::generate_insights_from_bars) but
    /// surfaces the validation error.
    pub fn try_generate_insights_from_bars(
        &self,
        symbol: &str,
        period: &str,
        bars: Vec<Bar>,
    ) -> Result<InsightReport, MalformedSeriesError> {
        let series = Series::new(symbol, period, bars)?;
        Ok(self.generate_insights(&series))
    }
}
