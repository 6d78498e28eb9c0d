use serde::{Deserialize, Serialize};
use std::fmt;

/// Named alert conditions, in the order the alert engine evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    PriceChange,
    VolumeSpike,
    Volatility,
    RsiOverbought,
    RsiOversold,
    MaCrossover,
}

impl AlertKind {
    pub const ALL: [AlertKind; 6] = [
        AlertKind::PriceChange,
        AlertKind::VolumeSpike,
        AlertKind::Volatility,
        AlertKind::RsiOverbought,
        AlertKind::RsiOversold,
        AlertKind::MaCrossover,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AlertKind::PriceChange => "price_change",
            AlertKind::VolumeSpike => "volume_spike",
            AlertKind::Volatility => "volatility",
            AlertKind::RsiOverbought => "rsi_overbought",
            AlertKind::RsiOversold => "rsi_oversold",
            AlertKind::MaCrossover => "ma_crossover",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A triggered alert with the scalar that triggered it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub value: f64,
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
