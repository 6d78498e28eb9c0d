use super::bar::Bar;
use crate::domain::errors::MalformedSeriesError;
use serde::{Deserialize, Serialize};

/// Validated, chronologically ordered OHLCV series for one instrument.
///
/// Construction is the only place the ordering and OHLC invariants are checked;
/// once built the series is never mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    symbol: String,
    period: String,
    bars: Vec<Bar>,
}

impl Series {
    /// Build a series from bars in insertion (= chronological) order.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSeriesError` on duplicate or decreasing timestamps and on
    /// any bar that fails [`Bar::validate`].
    pub fn new(
        symbol: impl Into<String>,
        period: impl Into<String>,
        bars: Vec<Bar>,
    ) -> Result<Self, MalformedSeriesError> {
        for (index, bar) in bars.iter().enumerate() {
            bar.validate(index)?;

            if index > 0 {
                let previous = bars[index - 1].timestamp;
                if bar.timestamp == previous {
                    return Err(MalformedSeriesError::DuplicateTimestamp {
                        index,
                        timestamp: bar.timestamp,
                    });
                }
                if bar.timestamp < previous {
                    return Err(MalformedSeriesError::NonMonotonicTimestamp {
                        index,
                        previous,
                        current: bar.timestamp,
                    });
                }
            }
        }

        Ok(Self {
            symbol: symbol.into(),
            period: period.into(),
            bars,
        })
    }

    /// An empty, trivially valid series.
    pub fn empty(symbol: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            period: period.into(),
            bars: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(Bar::close_f64).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(Bar::high_f64).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(Bar::low_f64).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(Bar::volume_f64).collect()
    }
}

/// Deserialization re-runs validation so a `Series` can never exist unchecked.
impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawSeries {
            symbol: String,
            period: String,
            bars: Vec<Bar>,
        }

        let raw = RawSeries::deserialize(deserializer)?;
        Series::new(raw.symbol, raw.period, raw.bars).map_err(serde::de::Error::custom)
    }
}
