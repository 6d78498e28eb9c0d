use crate::domain::errors::IndicatorError;
use crate::domain::market::IndicatorSeries;
use ta::Next;
use ta::indicators::SimpleMovingAverage;

/// SMA over `values`, undefined until `period` values have been seen.
///
/// `ta`'s SMA averages over a partial window during warm-up; those outputs are
/// masked so position `i` is defined only for `i >= period - 1`.
pub fn simple_moving_average(
    values: &[f64],
    period: usize,
) -> Result<IndicatorSeries, IndicatorError> {
    let mut sma = SimpleMovingAverage::new(period).map_err(|e| {
        IndicatorError::InvalidParameters {
            indicator: "SMA",
            reason: format!("{:?} (period {})", e, period),
        }
    })?;

    Ok(values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let avg = sma.next(value);
            (i + 1 >= period).then_some(avg)
        })
        .collect())
}

/// EMA with smoothing factor `2 / (period + 1)`, seeded by the SMA of the first
/// `period` defined values.
///
/// Leading `None`s are skipped, which lets the MACD signal line be computed over
/// the MACD line. Defined values are expected to form a contiguous suffix; a gap
/// ends the computation and the remaining positions stay undefined.
pub fn exponential_moving_average(
    values: &[Option<f64>],
    period: usize,
) -> Result<Vec<Option<f64>>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod {
            indicator: "EMA",
            period,
        });
    }

    let mut result = vec![None; values.len()];
    let Some(start) = values.iter().position(Option::is_some) else {
        return Ok(result);
    };

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut seed_sum = 0.0;
    let mut seen = 0;
    let mut prev_ema: Option<f64> = None;

    for (i, value) in values.iter().enumerate().skip(start) {
        let Some(value) = *value else {
            break;
        };

        let ema = match prev_ema {
            Some(prev) => prev + multiplier * (value - prev),
            None => {
                seed_sum += value;
                seen += 1;
                if seen < period {
                    continue;
                }
                seed_sum / period as f64
            }
        };

        if !ema.is_finite() {
            break;
        }
        prev_ema = Some(ema);
        result[i] = Some(ema);
    }

    Ok(result)
}
