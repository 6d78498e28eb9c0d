use super::moving_average::simple_moving_average;
use crate::domain::analytics::Stats;
use crate::domain::errors::IndicatorError;
use crate::domain::market::IndicatorSeries;

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerColumns {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Bollinger Bands: SMA(period) ± multiplier * population standard deviation.
///
/// The middle band is the SMA column itself and the deviation is taken over the
/// same trailing window, so the bands collapse exactly on a flat window.
pub fn bollinger_bands(
    closes: &[f64],
    period: usize,
    multiplier: f64,
) -> Result<BollingerColumns, IndicatorError> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(IndicatorError::InvalidParameters {
            indicator: "Bollinger Bands",
            reason: format!("multiplier {} (period {})", multiplier, period),
        });
    }

    let middle = simple_moving_average(closes, period).map_err(|e| {
        IndicatorError::InvalidParameters {
            indicator: "Bollinger Bands",
            reason: e.to_string(),
        }
    })?;

    let mut upper = Vec::with_capacity(closes.len());
    let mut lower = Vec::with_capacity(closes.len());

    for (i, mid) in middle.iter().enumerate() {
        let band = mid.and_then(|mid| {
            let std = Stats::population_std(&closes[i + 1 - period..=i])?;
            Some((mid + multiplier * std, mid - multiplier * std))
        });
        upper.push(band.map(|(up, _)| up));
        lower.push(band.map(|(_, low)| low));
    }

    Ok(BollingerColumns {
        upper: upper.into(),
        middle,
        lower: lower.into(),
    })
}
