//! Indicator calculator
//!
//! Turns a validated [`Series`] into an [`AugmentedSeries`] carrying SMA20/50,
//! RSI, MACD, Bollinger Bands, ATR and the volume moving average.
//!
//! Each indicator is computed independently: a failure in one (for instance an
//! invalid period) is logged and leaves that column undefined while the rest are
//! still produced.

pub mod atr;
pub mod bollinger;
pub mod macd;
pub mod moving_average;
pub mod rsi;

use crate::domain::config::IndicatorConfig;
use crate::domain::errors::IndicatorError;
use crate::domain::market::{AugmentedSeries, IndicatorColumns, IndicatorSeries, Series};
use tracing::{debug, warn};

pub use atr::{WilderAtr, average_true_range};
pub use bollinger::{BollingerColumns, bollinger_bands};
pub use macd::{MacdColumns, macd};
pub use moving_average::{exponential_moving_average, simple_moving_average};
pub use rsi::{WilderRsi, relative_strength_index};

/// Stateless calculator; holds only the lookback configuration.
#[derive(Debug, Clone, Default)]
pub struct IndicatorCalculator {
    config: IndicatorConfig,
}

impl IndicatorCalculator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    /// Compute all indicator columns for `series`.
    ///
    /// The input is not modified; the returned value owns a copy of it.
    pub fn augment(&self, series: &Series) -> AugmentedSeries {
        let cfg = &self.config;
        let len = series.len();
        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();
        let volumes = series.volumes();

        let sma_20 = column_or_undefined(
            "SMA short",
            len,
            simple_moving_average(&closes, cfg.sma_short_period),
        );
        let sma_50 = column_or_undefined(
            "SMA long",
            len,
            simple_moving_average(&closes, cfg.sma_long_period),
        );
        let rsi = column_or_undefined("RSI", len, relative_strength_index(&closes, cfg.rsi_period));

        let (macd_line, macd_signal, macd_histogram) = match macd(
            &closes,
            cfg.macd_fast_period,
            cfg.macd_slow_period,
            cfg.macd_signal_period,
        ) {
            Ok(columns) => (columns.line, columns.signal, columns.histogram),
            Err(e) => {
                warn!("Indicator MACD failed for {}: {}", series.symbol(), e);
                (
                    IndicatorSeries::undefined(len),
                    IndicatorSeries::undefined(len),
                    IndicatorSeries::undefined(len),
                )
            }
        };

        let (bb_upper, bb_middle, bb_lower) =
            match bollinger_bands(&closes, cfg.bb_period, cfg.bb_std_dev) {
                Ok(bands) => (bands.upper, bands.middle, bands.lower),
                Err(e) => {
                    warn!("Indicator Bollinger Bands failed for {}: {}", series.symbol(), e);
                    (
                        IndicatorSeries::undefined(len),
                        IndicatorSeries::undefined(len),
                        IndicatorSeries::undefined(len),
                    )
                }
            };

        let atr = column_or_undefined(
            "ATR",
            len,
            average_true_range(&highs, &lows, &closes, cfg.atr_period),
        );
        let volume_ma = column_or_undefined(
            "Volume MA",
            len,
            simple_moving_average(&volumes, cfg.volume_ma_period),
        );

        debug!(
            "Augmented {} ({} bars): rsi from {:?}, macd signal from {:?}",
            series.symbol(),
            len,
            rsi.first_defined(),
            macd_signal.first_defined()
        );

        AugmentedSeries::new(
            series.clone(),
            IndicatorColumns {
                sma_20,
                sma_50,
                rsi,
                macd_line,
                macd_signal,
                macd_histogram,
                bb_upper,
                bb_middle,
                bb_lower,
                atr,
                volume_ma,
            },
        )
    }
}

fn column_or_undefined(
    name: &str,
    len: usize,
    result: Result<IndicatorSeries, IndicatorError>,
) -> IndicatorSeries {
    match result {
        Ok(column) => column,
        Err(e) => {
            warn!("Indicator {} failed: {}", name, e);
            IndicatorSeries::undefined(len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::Bar;
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal_macros::dec;

    fn series_from_closes(closes: &[f64]) -> Series {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let close = Decimal::from_f64(c).unwrap();
                Bar::new(
                    i as i64 * 86_400_000,
                    close,
                    close + dec!(1),
                    close - dec!(1),
                    close,
                    dec!(1000),
                )
            })
            .collect();
        Series::new("TEST", "3mo", bars).unwrap()
    }

    #[test]
    fn test_all_columns_aligned_with_series() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let augmented = IndicatorCalculator::default().augment(&series_from_closes(&closes));
        let ind = &augmented.indicators;

        for column in [
            &ind.sma_20,
            &ind.sma_50,
            &ind.rsi,
            &ind.macd_line,
            &ind.macd_signal,
            &ind.macd_histogram,
            &ind.bb_upper,
            &ind.bb_middle,
            &ind.bb_lower,
            &ind.atr,
            &ind.volume_ma,
        ] {
            assert_eq!(column.len(), 60);
        }

        assert_eq!(ind.sma_20.first_defined(), Some(19));
        assert_eq!(ind.sma_50.first_defined(), Some(49));
        assert_eq!(ind.rsi.first_defined(), Some(14));
        assert_eq!(ind.atr.first_defined(), Some(13));
        assert_eq!(ind.volume_ma.last(), Some(1000.0));
    }

    #[test]
    fn test_invalid_period_only_disables_that_indicator() {
        let config = IndicatorConfig {
            rsi_period: 0,
            macd_fast_period: 30,
            ..IndicatorConfig::default()
        };
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let augmented = IndicatorCalculator::new(config).augment(&series_from_closes(&closes));

        assert_eq!(augmented.indicators.rsi.len(), 60);
        assert_eq!(augmented.indicators.rsi.first_defined(), None);
        assert_eq!(augmented.indicators.macd_line.first_defined(), None);
        assert!(augmented.indicators.sma_20.last().is_some());
        assert!(augmented.indicators.atr.last().is_some());
    }

    #[test]
    fn test_augment_does_not_alter_series() {
        let series = series_from_closes(&[10.0, 11.0, 12.0]);
        let augmented = IndicatorCalculator::default().augment(&series);
        assert_eq!(augmented.series(), &series);
        assert_eq!(augmented.closes(), &[10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_empty_series() {
        let augmented = IndicatorCalculator::default().augment(&Series::empty("X", "1mo"));
        assert!(augmented.is_empty());
        assert!(augmented.indicators.rsi.is_empty());
    }
}
