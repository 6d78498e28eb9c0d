use crate::domain::config::AnalysisConfig;
use crate::domain::insights::{TrendAnalysis, TrendDirection, TrendStrength};
use crate::domain::market::AugmentedSeries;

pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Classify the last close against SMA20 (short term) and SMA50 (medium term).
    ///
    /// Strength compares the relative distance from SMA20 with
    /// `trend_strength_threshold`. Any field whose moving average is undefined is `None`.
    pub fn analyze(augmented: &AugmentedSeries, config: &AnalysisConfig) -> TrendAnalysis {
        let Some(close) = augmented.last_close() else {
            return TrendAnalysis::default();
        };
        let sma_short = augmented.indicators.sma_20.last();
        let sma_long = augmented.indicators.sma_50.last();

        TrendAnalysis {
            short_term: sma_short.map(|sma| direction(close, sma)),
            medium_term: sma_long.map(|sma| direction(close, sma)),
            strength: sma_short
                .filter(|sma| *sma != 0.0)
                .map(|sma| {
                    if ((close - sma) / sma).abs() > config.trend_strength_threshold {
                        TrendStrength::Strong
                    } else {
                        TrendStrength::Weak
                    }
                }),
        }
    }
}

fn direction(close: f64, sma: f64) -> TrendDirection {
    if close > sma {
        TrendDirection::Bullish
    } else {
        TrendDirection::Bearish
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::{Bar, IndicatorColumns, IndicatorSeries, Series};
    use rust_decimal_macros::dec;

    fn last_close_100(sma_20: Option<f64>, sma_50: Option<f64>) -> AugmentedSeries {
        let bar = Bar::new(0, dec!(100), dec!(101), dec!(99), dec!(100), dec!(10));
        let series = Series::new("TEST", "1mo", vec![bar]).unwrap();
        AugmentedSeries::new(
            series,
            IndicatorColumns {
                sma_20: IndicatorSeries::new(vec![sma_20]),
                sma_50: IndicatorSeries::new(vec![sma_50]),
                ..IndicatorColumns::default()
            },
        )
    }

    #[test]
    fn test_bullish_strong() {
        let trend = TrendAnalyzer::analyze(
            &last_close_100(Some(95.0), Some(90.0)),
            &AnalysisConfig::default(),
        );
        assert_eq!(trend.short_term, Some(TrendDirection::Bullish));
        assert_eq!(trend.medium_term, Some(TrendDirection::Bullish));
        assert_eq!(trend.strength, Some(TrendStrength::Strong));
    }

    #[test]
    fn test_mixed_weak() {
        let trend = TrendAnalyzer::analyze(
            &last_close_100(Some(99.5), Some(101.0)),
            &AnalysisConfig::default(),
        );
        assert_eq!(trend.short_term, Some(TrendDirection::Bullish));
        assert_eq!(trend.medium_term, Some(TrendDirection::Bearish));
        assert_eq!(trend.strength, Some(TrendStrength::Weak));
    }

    #[test]
    fn test_close_equal_to_sma_is_bearish() {
        let trend = TrendAnalyzer::analyze(
            &last_close_100(Some(100.0), None),
            &AnalysisConfig::default(),
        );
        assert_eq!(trend.short_term, Some(TrendDirection::Bearish));
        assert_eq!(trend.strength, Some(TrendStrength::Weak));
    }

    #[test]
    fn test_undefined_sma_propagates() {
        let trend =
            TrendAnalyzer::analyze(&last_close_100(None, None), &AnalysisConfig::default());
        assert_eq!(trend, TrendAnalysis::default());
    }
}
