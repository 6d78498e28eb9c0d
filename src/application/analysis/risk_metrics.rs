use crate::domain::analytics::Stats;
use crate::domain::config::AnalysisConfig;
use crate::domain::insights::RiskMetrics;
use crate::domain::market::Series;

pub struct RiskMetricsCalculator;

impl RiskMetricsCalculator {
    /// Risk metrics of the daily-return distribution.
    ///
    /// Degenerate inputs (too few returns, zero variance) leave the affected
    /// metric as `None`.
    pub fn compute(series: &Series, config: &AnalysisConfig) -> RiskMetrics {
        let closes = series.closes();
        let returns = Stats::calculate_returns(&closes);
        let annualization = (config.annualization_periods as f64).sqrt();

        RiskMetrics {
            volatility: Stats::sample_std(&returns).map(|std| std * annualization),
            var_95: Stats::quantile_linear(&returns, 1.0 - config.var_confidence),
            max_drawdown: Stats::max_drawdown(&closes),
            sharpe_ratio: Stats::sharpe_ratio(&returns, config.annualization_periods),
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

    fn series(closes: &[f64]) -> Series {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let close = Decimal::from_f64(c).unwrap();
                Bar::new(i as i64, close, close, close, close, dec!(1))
            })
            .collect();
        Series::new("TEST", "1y", bars).unwrap()
    }

    #[test]
    fn test_flat_series_has_null_sharpe() {
        let flat = series(&[100.0; 30]);
        let metrics = RiskMetricsCalculator::compute(&flat, &AnalysisConfig::default());
        assert_eq!(metrics.volatility, Some(0.0));
        assert_eq!(metrics.sharpe_ratio, None);
        assert_eq!(metrics.max_drawdown, Some(0.0));
        assert_eq!(metrics.var_95, Some(0.0));
    }

    #[test]
    fn test_drawdown_and_var() {
        let closes = [100.0, 120.0, 90.0, 130.0, 117.0];
        let metrics = RiskMetricsCalculator::compute(&series(&closes), &AnalysisConfig::default());

        assert!((metrics.max_drawdown.unwrap() + 0.25).abs() < 1e-9);

        let returns = Stats::calculate_returns(&closes);
        let worst = returns.iter().copied().fold(f64::INFINITY, f64::min);
        let var = metrics.var_95.unwrap();
        assert!(var >= worst);
        assert!(var < 0.0);
        assert!(metrics.sharpe_ratio.is_some());
    }

    #[test]
    fn test_single_bar() {
        let metrics = RiskMetricsCalculator::compute(&series(&[50.0]), &AnalysisConfig::default());
        assert_eq!(metrics.volatility, None);
        assert_eq!(metrics.var_95, None);
        assert_eq!(metrics.max_drawdown, Some(0.0));
        assert_eq!(metrics.sharpe_ratio, None);
    }

    #[test]
    fn test_empty_series() {
        let metrics =
            RiskMetricsCalculator::compute(&Series::empty("X", "1y"), &AnalysisConfig::default());
        assert_eq!(metrics, RiskMetrics::default());
    }
}
