//! Signal and alert thresholds from environment variables.

use super::{VarLookup, parse_f64};
use anyhow::Result;

/// Alert environment configuration
#[derive(Debug, Clone)]
pub struct AlertEnvConfig {
    // Signal generator
    pub signal_rsi_oversold: f64,
    pub signal_rsi_overbought: f64,

    // Alert engine
    pub price_change_threshold: f64,
    pub volume_spike_threshold: f64,
    pub volatility_threshold: f64,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub ma_crossover_threshold: f64,
}

impl AlertEnvConfig {
    pub fn from_vars(vars: VarLookup) -> Result<Self> {
        Ok(Self {
            signal_rsi_oversold: parse_f64(vars, "SIGNAL_RSI_OVERSOLD", 30.0)?,
            signal_rsi_overbought: parse_f64(vars, "SIGNAL_RSI_OVERBOUGHT", 70.0)?,
            price_change_threshold: parse_f64(vars, "ALERT_PRICE_CHANGE_THRESHOLD", 0.05)?,
            volume_spike_threshold: parse_f64(vars, "ALERT_VOLUME_SPIKE_THRESHOLD", 2.0)?,
            volatility_threshold: parse_f64(vars, "ALERT_VOLATILITY_THRESHOLD", 0.02)?,
            rsi_overbought: parse_f64(vars, "ALERT_RSI_OVERBOUGHT", 70.0)?,
            rsi_oversold: parse_f64(vars, "ALERT_RSI_OVERSOLD", 30.0)?,
            ma_crossover_threshold: parse_f64(vars, "ALERT_MA_CROSSOVER_THRESHOLD", 0.01)?,
        })
    }
}
