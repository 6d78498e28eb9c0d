use super::indicator_series::IndicatorSeries;
use super::series::Series;
use serde::Serialize;

/// The technical indicators computed for a series, one column per indicator.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct IndicatorColumns {
    pub sma_20: IndicatorSeries,
    pub sma_50: IndicatorSeries,
    pub rsi: IndicatorSeries,
    pub macd_line: IndicatorSeries,
    pub macd_signal: IndicatorSeries,
    pub macd_histogram: IndicatorSeries,
    pub bb_upper: IndicatorSeries,
    pub bb_middle: IndicatorSeries,
    pub bb_lower: IndicatorSeries,
    pub atr: IndicatorSeries,
    pub volume_ma: IndicatorSeries,
}

/// A series together with its indicator columns.
///
/// Produced by the indicator calculator; the source series is carried unchanged.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AugmentedSeries {
    series: Series,
    closes: Vec<f64>,
    pub indicators: IndicatorColumns,
}

impl AugmentedSeries {
    pub fn new(series: Series, indicators: IndicatorColumns) -> Self {
        let closes = series.closes();
        Self {
            series,
            closes,
            indicators,
        }
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}
