//! Insight Configuration Domain Value Object
//!
//! This module defines `InsightConfig`, which groups every period and threshold
//! used by the insight pipeline, with validation logic.
//!
//! # Invariants
//!
//! - All indicator periods must be > 0
//! - `macd_fast_period` must be < `macd_slow_period`
//! - Fractions (`trend_strength_threshold`, `var_confidence`) must lie in (0.0, 1.0)
//! - RSI thresholds must satisfy `0 <= oversold < overbought <= 100`

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for InsightConfig validation
#[derive(Debug, Error, PartialEq)]
pub enum InsightConfigError {
    #[error("Invalid period: {field} = {value}. Must be positive")]
    InvalidPeriod { field: String, value: usize },

    #[error("Invalid MACD periods: fast {fast} must be shorter than slow {slow}")]
    InvalidMacdPeriods { fast: usize, slow: usize },

    #[error("Invalid fraction: {field} = {value}. Must be between 0.0 and 1.0")]
    InvalidFraction { field: String, value: f64 },

    #[error("Invalid RSI thresholds: oversold {oversold} must be below overbought {overbought} within [0, 100]")]
    InvalidRsiThresholds { oversold: f64, overbought: f64 },

    #[error("Invalid threshold: {field} = {value}. Must be finite and non-negative")]
    InvalidThreshold { field: String, value: f64 },
}

/// Lookback parameters for the indicator calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub sma_short_period: usize,
    pub sma_long_period: usize,
    pub rsi_period: usize,
    pub macd_fast_period: usize,
    pub macd_slow_period: usize,
    pub macd_signal_period: usize,
    pub bb_period: usize,
    pub bb_std_dev: f64,
    pub atr_period: usize,
    pub volume_ma_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_short_period: 20,
            sma_long_period: 50,
            rsi_period: 14,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            bb_period: 20,
            bb_std_dev: 2.0,
            atr_period: 14,
            volume_ma_period: 20,
        }
    }
}

/// Parameters shared by statistics, trend, key-level and risk computations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Periods per year used to annualize volatility and Sharpe ratio
    pub annualization_periods: usize,
    /// Bars back for the `1d`, `1w` and `1m` price change horizons
    pub price_change_horizons: [usize; 3],
    pub volume_trend_horizon: usize,
    /// Relative distance from SMA20 above which a trend is "strong"
    pub trend_strength_threshold: f64,
    pub key_level_window: usize,
    /// Confidence of the historical VaR (0.95 => 5th percentile of returns)
    pub var_confidence: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            annualization_periods: 252,
            price_change_horizons: [1, 5, 20],
            volume_trend_horizon: 5,
            trend_strength_threshold: 0.02,
            key_level_window: 20,
            var_confidence: 0.95,
        }
    }
}

/// RSI bounds used by the signal generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalThresholds {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
        }
    }
}

/// Trigger levels for the alert registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Absolute latest return (fraction) above which a price move is significant
    pub price_change: f64,
    /// Volume ratio against its moving average
    pub volume_spike: f64,
    /// Daily return standard deviation
    pub volatility: f64,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    /// Absolute SMA20/SMA50 gap below which the averages are considered crossing
    pub ma_crossover: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            price_change: 0.05,
            volume_spike: 2.0,
            volatility: 0.02,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            ma_crossover: 0.01,
        }
    }
}

/// Complete configuration of the insight pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub indicators: IndicatorConfig,
    pub analysis: AnalysisConfig,
    pub signals: SignalThresholds,
    pub alerts: AlertThresholds,
}

impl InsightConfig {
    /// Create a new InsightConfig with validation
    ///
    /// # Errors
    ///
    /// Returns `InsightConfigError` if any parameter violates invariants
    pub fn new(
        indicators: IndicatorConfig,
        analysis: AnalysisConfig,
        signals: SignalThresholds,
        alerts: AlertThresholds,
    ) -> Result<Self, InsightConfigError> {
        let config = Self {
            indicators,
            analysis,
            signals,
            alerts,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate all invariants
    pub fn validate(&self) -> Result<(), InsightConfigError> {
        let ind = &self.indicators;
        for (field, value) in [
            ("sma_short_period", ind.sma_short_period),
            ("sma_long_period", ind.sma_long_period),
            ("rsi_period", ind.rsi_period),
            ("macd_fast_period", ind.macd_fast_period),
            ("macd_slow_period", ind.macd_slow_period),
            ("macd_signal_period", ind.macd_signal_period),
            ("bb_period", ind.bb_period),
            ("atr_period", ind.atr_period),
            ("volume_ma_period", ind.volume_ma_period),
            ("annualization_periods", self.analysis.annualization_periods),
            ("volume_trend_horizon", self.analysis.volume_trend_horizon),
            ("key_level_window", self.analysis.key_level_window),
        ] {
            Self::validate_period(field, value)?;
        }
        for horizon in self.analysis.price_change_horizons {
            Self::validate_period("price_change_horizons", horizon)?;
        }

        if ind.macd_fast_period >= ind.macd_slow_period {
            return Err(InsightConfigError::InvalidMacdPeriods {
                fast: ind.macd_fast_period,
                slow: ind.macd_slow_period,
            });
        }

        Self::validate_threshold("bb_std_dev", ind.bb_std_dev)?;
        Self::validate_fraction(
            "trend_strength_threshold",
            self.analysis.trend_strength_threshold,
        )?;
        Self::validate_fraction("var_confidence", self.analysis.var_confidence)?;

        Self::validate_rsi_bounds(self.signals.rsi_oversold, self.signals.rsi_overbought)?;
        Self::validate_rsi_bounds(self.alerts.rsi_oversold, self.alerts.rsi_overbought)?;

        for (field, value) in [
            ("alerts.price_change", self.alerts.price_change),
            ("alerts.volume_spike", self.alerts.volume_spike),
            ("alerts.volatility", self.alerts.volatility),
            ("alerts.ma_crossover", self.alerts.ma_crossover),
        ] {
            Self::validate_threshold(field, value)?;
        }

        Ok(())
    }

    fn validate_period(field: &str, value: usize) -> Result<(), InsightConfigError> {
        if value == 0 {
            return Err(InsightConfigError::InvalidPeriod {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    fn validate_fraction(field: &str, value: f64) -> Result<(), InsightConfigError> {
        if !(value > 0.0 && value < 1.0) {
            return Err(InsightConfigError::InvalidFraction {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    fn validate_threshold(field: &str, value: f64) -> Result<(), InsightConfigError> {
        if !value.is_finite() || value < 0.0 {
            return Err(InsightConfigError::InvalidThreshold {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    fn validate_rsi_bounds(oversold: f64, overbought: f64) -> Result<(), InsightConfigError> {
        let in_range = (0.0..=100.0).contains(&oversold) && (0.0..=100.0).contains(&overbought);
        if !in_range || oversold >= overbought {
            return Err(InsightConfigError::InvalidRsiThresholds {
                oversold,
                overbought,
            });
        }
        Ok(())
    }
}
