use statrs::statistics::{Data, Distribution};

/// Variance below this is treated as zero (degenerate return distribution).
pub const ZERO_VARIANCE_EPSILON: f64 = 1e-12;

/// Shared statistics utilities for return-based calculations.
pub struct Stats;

impl Stats {
    /// Simple returns `p[t] / p[t-1] - 1` for t >= 1.
    ///
    /// Non-positive previous prices cannot occur in a validated series; they are
    /// skipped rather than producing infinities.
    pub fn calculate_returns(prices: &[f64]) -> Vec<f64> {
        prices
            .windows(2)
            .filter(|w| w[0] > 0.0)
            .map(|w| w[1] / w[0] - 1.0)
            .collect()
    }

    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Data::new(values.to_vec()).mean().filter(|m| m.is_finite())
    }

    /// Sample standard deviation (n-1 denominator).
    pub fn sample_std(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        Data::new(values.to_vec())
            .std_dev()
            .filter(|s| s.is_finite())
    }

    /// Population standard deviation (n denominator).
    pub fn population_std(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(variance.max(0.0).sqrt())
    }

    /// Adjusted Fisher-Pearson sample skewness.
    ///
    /// `None` with fewer than 3 values; a zero-variance distribution has no
    /// asymmetry and reports 0.
    pub fn skewness(values: &[f64]) -> Option<f64> {
        if values.len() < 3 {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let m2 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        if m2 < ZERO_VARIANCE_EPSILON {
            return Some(0.0);
        }
        let m3 = values.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / n;

        let g1 = m3 / m2.powf(1.5);
        let skew = g1 * (n * (n - 1.0)).sqrt() / (n - 2.0);
        skew.is_finite().then_some(skew)
    }

    /// Quantile with linear interpolation between order statistics.
    ///
    /// For sorted values `x` and rank `h = (n - 1) * q`, the result is
    /// `x[floor(h)] + (h - floor(h)) * (x[ceil(h)] - x[floor(h)])`.
    pub fn quantile_linear(values: &[f64], q: f64) -> Option<f64> {
        if values.is_empty() || !(0.0..=1.0).contains(&q) {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let rank = (sorted.len() - 1) as f64 * q;
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        let fraction = rank - lower as f64;

        Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
    }

    /// Minimum of `p[t] / max(p[0..=t]) - 1`; always <= 0.
    pub fn max_drawdown(prices: &[f64]) -> Option<f64> {
        let mut peak = *prices.first()?;
        let mut worst = 0.0_f64;

        for &price in prices {
            if price > peak {
                peak = price;
            }
            if peak > 0.0 {
                worst = worst.min(price / peak - 1.0);
            }
        }

        Some(worst)
    }

    /// Annualized Sharpe ratio `mean / std * sqrt(periods)` with a zero risk-free rate.
    ///
    /// `None` when the standard deviation is undefined or zero.
    pub fn sharpe_ratio(returns: &[f64], annualization_periods: usize) -> Option<f64> {
        let mean = Self::mean(returns)?;
        let std = Self::sample_std(returns)?;
        if std <= ZERO_VARIANCE_EPSILON {
            return None;
        }
        Some(mean / std * (annualization_periods as f64).sqrt())
    }

    /// Percentage change between the last value and the one `horizon` steps earlier.
    ///
    /// `None` when fewer than `horizon + 1` values exist or the base is zero.
    pub fn percent_change(values: &[f64], horizon: usize) -> Option<f64> {
        if horizon == 0 || values.len() < horizon + 1 {
            return None;
        }
        let last = values[values.len() - 1];
        let base = values[values.len() - 1 - horizon];
        if base == 0.0 {
            return None;
        }
        Some((last / base - 1.0) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_returns() {
        let returns = Stats::calculate_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.1).abs() < 1e-12);
        assert!((returns[1] + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_sample_std() {
        // Sample variance of [1, 2, 3, 4] is 1.6667
        let std = Stats::sample_std(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((std - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(Stats::sample_std(&[1.0]), None);
    }

    #[test]
    fn test_population_std() {
        let std = Stats::population_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((std - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_skewness_symmetric_and_degenerate() {
        let skew = Stats::skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(skew.abs() < 1e-12);
        assert_eq!(Stats::skewness(&[2.0, 2.0, 2.0]), Some(0.0));
        assert_eq!(Stats::skewness(&[1.0, 2.0]), None);
    }

    #[test]
    fn test_skewness_right_tail() {
        let skew = Stats::skewness(&[1.0, 1.0, 1.0, 1.0, 10.0]).unwrap();
        assert!(skew > 0.0);
    }

    #[test]
    fn test_quantile_linear() {
        let values = [5.0, 1.0, 3.0, 2.0, 4.0];
        assert_eq!(Stats::quantile_linear(&values, 0.0), Some(1.0));
        assert_eq!(Stats::quantile_linear(&values, 1.0), Some(5.0));
        assert_eq!(Stats::quantile_linear(&values, 0.5), Some(3.0));
        // rank = 4 * 0.05 = 0.2 => 1.0 + 0.2 * (2.0 - 1.0)
        let q = Stats::quantile_linear(&values, 0.05).unwrap();
        assert!((q - 1.2).abs() < 1e-12);
        assert_eq!(Stats::quantile_linear(&[], 0.05), None);
    }

    #[test]
    fn test_max_drawdown() {
        let dd = Stats::max_drawdown(&[100.0, 120.0, 90.0, 130.0, 117.0]).unwrap();
        assert!((dd + 0.25).abs() < 1e-12);
        assert_eq!(Stats::max_drawdown(&[100.0, 101.0, 102.0]), Some(0.0));
        assert_eq!(Stats::max_drawdown(&[]), None);
    }

    #[test]
    fn test_sharpe_ratio() {
        let sharpe = Stats::sharpe_ratio(&[0.01, 0.02, 0.01, 0.02], 252).unwrap();
        assert!(sharpe > 0.0);

        assert_eq!(Stats::sharpe_ratio(&[0.01, 0.01, 0.01], 252), None);
        assert_eq!(Stats::sharpe_ratio(&[0.01], 252), None);
    }

    #[test]
    fn test_percent_change() {
        let values = [100.0, 105.0, 110.0];
        let change = Stats::percent_change(&values, 2).unwrap();
        assert!((change - 10.0).abs() < 1e-9);
        assert_eq!(Stats::percent_change(&values, 3), None);
    }
}
