use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage change over a fixed number of bars.
///
/// `InsufficientHistory` and `ZeroBase` are kept distinct from a computed zero;
/// `percent()` still reports them as `0.0` for consumers that expect a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum HorizonChange {
    Computed(f64),
    InsufficientHistory,
    /// The value `horizon` bars back is zero (e.g. a session with no volume)
    ZeroBase,
}

impl HorizonChange {
    /// Change in percent, `0.0` when history is insufficient.
    pub fn percent(&self) -> f64 {
        match self {
            HorizonChange::Computed(value) => *value,
            HorizonChange::InsufficientHistory | HorizonChange::ZeroBase => 0.0,
        }
    }

    /// Change in percent, `None` when history is insufficient.
    pub fn defined(&self) -> Option<f64> {
        match self {
            HorizonChange::Computed(value) => Some(*value),
            HorizonChange::InsufficientHistory | HorizonChange::ZeroBase => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, HorizonChange::Computed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnDistribution {
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub skew: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChanges {
    #[serde(rename = "1d")]
    pub one_day: HorizonChange,
    #[serde(rename = "1w")]
    pub one_week: HorizonChange,
    #[serde(rename = "1m")]
    pub one_month: HorizonChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAnalysis {
    pub avg_volume: f64,
    pub volume_trend: HorizonChange,
}

/// Descriptive statistics of a non-empty series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub daily_returns: ReturnDistribution,
    /// Annualized standard deviation of daily returns
    pub volatility: Option<f64>,
    pub current_price: f64,
    pub price_change: PriceChanges,
    pub volume_analysis: VolumeAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Bullish,
    Bearish,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Bullish => write!(f, "bullish"),
            TrendDirection::Bearish => write!(f, "bearish"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStrength {
    Strong,
    Weak,
}

impl fmt::Display for TrendStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendStrength::Strong => write!(f, "strong"),
            TrendStrength::Weak => write!(f, "weak"),
        }
    }
}

/// Trend classification; a field is `None` when its moving average is undefined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub short_term: Option<TrendDirection>,
    pub medium_term: Option<TrendDirection>,
    pub strength: Option<TrendStrength>,
}

/// Support and resistance levels.
///
/// Currently one level each; the list shape leaves room for multi-level detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyLevels {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

/// Return-distribution risk metrics; degenerate inputs yield `None`, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub volatility: Option<f64>,
    pub var_95: Option<f64>,
    pub max_drawdown: Option<f64>,
    pub sharpe_ratio: Option<f64>,
}
