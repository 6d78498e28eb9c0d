//! Configuration module for rustinsight.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Indicators, Analysis, Alerts, and Logging.

mod alert_config;
mod analysis_config;
mod indicator_config;
mod logging_config;

pub use alert_config::AlertEnvConfig;
pub use analysis_config::AnalysisEnvConfig;
pub use indicator_config::IndicatorEnvConfig;
pub use logging_config::LoggingEnvConfig;

use crate::domain::config::{
    AlertThresholds, AnalysisConfig, IndicatorConfig, InsightConfig, SignalThresholds,
};
use anyhow::{Context, Result};
use std::env;

/// Variable lookup used by the sub-configs; `from_env` passes `std::env::var`.
pub type VarLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub(crate) fn parse_usize(vars: VarLookup, key: &str, default: usize) -> Result<usize> {
    vars(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<usize>()
        .context(format!("Failed to parse {}", key))
}

pub(crate) fn parse_f64(vars: VarLookup, key: &str, default: f64) -> Result<f64> {
    vars(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<f64>()
        .context(format!("Failed to parse {}", key))
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub indicators: IndicatorEnvConfig,
    pub analysis: AnalysisEnvConfig,
    pub alerts: AlertEnvConfig,
    pub logging: LoggingEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars(vars: VarLookup) -> Result<Self> {
        Ok(Self {
            indicators: IndicatorEnvConfig::from_vars(vars)
                .context("Failed to load indicator config")?,
            analysis: AnalysisEnvConfig::from_vars(vars)
                .context("Failed to load analysis config")?,
            alerts: AlertEnvConfig::from_vars(vars).context("Failed to load alert config")?,
            logging: LoggingEnvConfig::from_vars(vars),
        })
    }

    /// Create the validated InsightConfig domain value object from this Config
    pub fn to_insight_config(&self) -> Result<InsightConfig> {
        let ind = &self.indicators;
        let analysis = &self.analysis;
        let alerts = &self.alerts;

        InsightConfig::new(
            IndicatorConfig {
                sma_short_period: ind.sma_short_period,
                sma_long_period: ind.sma_long_period,
                rsi_period: ind.rsi_period,
                macd_fast_period: ind.macd_fast_period,
                macd_slow_period: ind.macd_slow_period,
                macd_signal_period: ind.macd_signal_period,
                bb_period: ind.bb_period,
                bb_std_dev: ind.bb_std_dev,
                atr_period: ind.atr_period,
                volume_ma_period: ind.volume_ma_period,
            },
            AnalysisConfig {
                annualization_periods: analysis.annualization_periods,
                price_change_horizons: analysis.price_change_horizons,
                volume_trend_horizon: analysis.volume_trend_horizon,
                trend_strength_threshold: analysis.trend_strength_threshold,
                key_level_window: analysis.key_level_window,
                var_confidence: analysis.var_confidence,
            },
            SignalThresholds {
                rsi_oversold: alerts.signal_rsi_oversold,
                rsi_overbought: alerts.signal_rsi_overbought,
            },
            AlertThresholds {
                price_change: alerts.price_change_threshold,
                volume_spike: alerts.volume_spike_threshold,
                volatility: alerts.volatility_threshold,
                rsi_overbought: alerts.rsi_overbought,
                rsi_oversold: alerts.rsi_oversold,
                ma_crossover: alerts.ma_crossover_threshold,
            },
        )
        .map_err(|e| anyhow::anyhow!("Invalid insight config: {}", e))
    }
}
