use super::moving_average::exponential_moving_average;
use crate::domain::errors::IndicatorError;
use crate::domain::market::IndicatorSeries;

/// MACD line, signal line and histogram columns
#[derive(Debug, Clone, PartialEq)]
pub struct MacdColumns {
    pub line: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

/// MACD(fast, slow, signal) over `closes`.
///
/// line = EMA(fast) - EMA(slow); signal = EMA(signal) of the line;
/// histogram = line - signal, computed by plain subtraction so the identity holds
/// exactly wherever both are defined.
pub fn macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdColumns, IndicatorError> {
    if fast_period >= slow_period {
        return Err(IndicatorError::InvalidParameters {
            indicator: "MACD",
            reason: format!(
                "fast period {} must be shorter than slow period {}",
                fast_period, slow_period
            ),
        });
    }

    let closes: Vec<Option<f64>> = closes.iter().copied().map(Some).collect();
    let ema_fast = exponential_moving_average(&closes, fast_period)?;
    let ema_slow = exponential_moving_average(&closes, slow_period)?;

    let line: Vec<Option<f64>> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(fast, slow)| Some((*fast)? - (*slow)?))
        .collect();

    let signal = exponential_moving_average(&line, signal_period)?;

    let histogram: Vec<Option<f64>> = line
        .iter()
        .zip(&signal)
        .map(|(line, signal)| Some((*line)? - (*signal)?))
        .collect();

    Ok(MacdColumns {
        line: line.into(),
        signal: signal.into(),
        histogram: histogram.into(),
    })
}
