//! Statistics, trend, key-level and risk parameters from environment variables.

use super::{VarLookup, parse_f64, parse_usize};
use anyhow::{Context, Result};

/// Analysis environment configuration
#[derive(Debug, Clone)]
pub struct AnalysisEnvConfig {
    pub annualization_periods: usize,
    pub price_change_horizons: [usize; 3],
    pub volume_trend_horizon: usize,
    pub trend_strength_threshold: f64,
    pub key_level_window: usize,
    pub var_confidence: f64,
}

impl AnalysisEnvConfig {
    pub fn from_vars(vars: VarLookup) -> Result<Self> {
        Ok(Self {
            annualization_periods: parse_usize(vars, "ANNUALIZATION_PERIODS", 252)?,
            price_change_horizons: Self::parse_horizons(vars)?,
            volume_trend_horizon: parse_usize(vars, "VOLUME_TREND_HORIZON", 5)?,
            trend_strength_threshold: parse_f64(vars, "TREND_STRENGTH_THRESHOLD", 0.02)?,
            key_level_window: parse_usize(vars, "KEY_LEVEL_WINDOW", 20)?,
            var_confidence: parse_f64(vars, "VAR_CONFIDENCE", 0.95)?,
        })
    }

    /// `PRICE_CHANGE_HORIZONS` as three comma-separated bar counts, e.g. `1,5,20`.
    fn parse_horizons(vars: VarLookup) -> Result<[usize; 3]> {
        let Some(raw) = vars("PRICE_CHANGE_HORIZONS") else {
            return Ok([1, 5, 20]);
        };

        let horizons = raw
            .split(',')
            .map(|s| s.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to parse PRICE_CHANGE_HORIZONS")?;

        <[usize; 3]>::try_from(horizons).map_err(|v| {
            anyhow::anyhow!(
                "PRICE_CHANGE_HORIZONS must list exactly 3 horizons, got {}",
                v.len()
            )
        })
    }
}
