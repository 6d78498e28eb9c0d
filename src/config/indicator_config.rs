//! Indicator lookback parameters from environment variables.

use super::{VarLookup, parse_f64, parse_usize};
use anyhow::Result;

/// Indicator environment configuration
#[derive(Debug, Clone)]
pub struct IndicatorEnvConfig {
    // SMA
    pub sma_short_period: usize,
    pub sma_long_period: usize,

    // RSI
    pub rsi_period: usize,

    // MACD
    pub macd_fast_period: usize,
    pub macd_slow_period: usize,
    pub macd_signal_period: usize,

    // Bollinger Bands
    pub bb_period: usize,
    pub bb_std_dev: f64,

    pub atr_period: usize,
    pub volume_ma_period: usize,
}

impl IndicatorEnvConfig {
    pub fn from_vars(vars: VarLookup) -> Result<Self> {
        Ok(Self {
            sma_short_period: parse_usize(vars, "SMA_SHORT_PERIOD", 20)?,
            sma_long_period: parse_usize(vars, "SMA_LONG_PERIOD", 50)?,
            rsi_period: parse_usize(vars, "RSI_PERIOD", 14)?,
            macd_fast_period: parse_usize(vars, "MACD_FAST_PERIOD", 12)?,
            macd_slow_period: parse_usize(vars, "MACD_SLOW_PERIOD", 26)?,
            macd_signal_period: parse_usize(vars, "MACD_SIGNAL_PERIOD", 9)?,
            bb_period: parse_usize(vars, "BB_PERIOD", 20)?,
            bb_std_dev: parse_f64(vars, "BB_STD_DEV", 2.0)?,
            atr_period: parse_usize(vars, "ATR_PERIOD", 14)?,
            volume_ma_period: parse_usize(vars, "VOLUME_MA_PERIOD", 20)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_indicator_defaults() {
        let config = IndicatorEnvConfig::from_vars(&|_| None).unwrap();
        assert_eq!(config.sma_short_period, 20);
        assert_eq!(config.sma_long_period, 50);
        assert_eq!(config.macd_slow_period, 26);
        assert_eq!(config.bb_std_dev, 2.0);
    }

    #[test]
    fn test_indicator_overrides() {
        let vars: HashMap<&str, &str> = [("RSI_PERIOD", "21"), ("BB_STD_DEV", "2.5")].into();
        let lookup = |key: &str| vars.get(key).map(|v| v.to_string());

        let config = IndicatorEnvConfig::from_vars(&lookup).unwrap();
        assert_eq!(config.rsi_period, 21);
        assert_eq!(config.bb_std_dev, 2.5);
    }

    #[test]
    fn test_indicator_parse_error_names_variable() {
        let lookup = |key: &str| (key == "ATR_PERIOD").then(|| "fourteen".to_string());
        let err = IndicatorEnvConfig::from_vars(&lookup).unwrap_err();
        assert!(err.to_string().contains("ATR_PERIOD"));
    }
}
