use crate::domain::analytics::Stats;
use crate::domain::config::AnalysisConfig;
use crate::domain::insights::{
    HorizonChange, PriceChanges, ReturnDistribution, Statistics, VolumeAnalysis,
};
use crate::domain::market::AugmentedSeries;

/// Descriptive statistics over the full series.
pub struct StatisticsGenerator;

impl StatisticsGenerator {
    /// `None` for an empty series; otherwise every field is filled, with
    /// undefined sub-values where history is too short.
    pub fn compute(augmented: &AugmentedSeries, config: &AnalysisConfig) -> Option<Statistics> {
        let current_price = augmented.last_close()?;
        let closes = augmented.closes();
        let volumes = augmented.series().volumes();

        let returns = Stats::calculate_returns(closes);
        let std = Stats::sample_std(&returns);
        let volatility = std.map(|s| s * (config.annualization_periods as f64).sqrt());

        let [one_day, one_week, one_month] = config.price_change_horizons;

        Some(Statistics {
            daily_returns: ReturnDistribution {
                mean: Stats::mean(&returns),
                std,
                skew: Stats::skewness(&returns),
            },
            volatility,
            current_price,
            price_change: PriceChanges {
                one_day: horizon_change(closes, one_day),
                one_week: horizon_change(closes, one_week),
                one_month: horizon_change(closes, one_month),
            },
            volume_analysis: VolumeAnalysis {
                avg_volume: Stats::mean(&volumes).unwrap_or(0.0),
                volume_trend: horizon_change(&volumes, config.volume_trend_horizon),
            },
        })
    }
}

/// Percentage change of the last value against the one `horizon` bars back.
pub fn horizon_change(values: &[f64], horizon: usize) -> HorizonChange {
    if values.len() < horizon + 1 {
        return HorizonChange::InsufficientHistory;
    }
    match Stats::percent_change(values, horizon) {
        Some(change) => HorizonChange::Computed(change),
        None => HorizonChange::ZeroBase,
    }
}
