use crate::domain::errors::IndicatorError;
use crate::domain::market::IndicatorSeries;

/// RSI with Wilder's smoothing.
///
/// The first average gain/loss is the simple mean of the first `period` price
/// changes, so the first value appears at close index `period`. Afterwards:
/// `avg = (prev_avg * (period - 1) + current) / period`.
pub struct WilderRsi {
    period: usize,
    prev_close: Option<f64>,
    gain_sum: f64,
    loss_sum: f64,
    avg_gain: f64,
    avg_loss: f64,
    count: usize,
}

impl WilderRsi {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidPeriod {
                indicator: "RSI",
                period,
            });
        }
        Ok(Self {
            period,
            prev_close: None,
            gain_sum: 0.0,
            loss_sum: 0.0,
            avg_gain: 0.0,
            avg_loss: 0.0,
            count: 0,
        })
    }

    pub fn next(&mut self, close: f64) -> Option<f64> {
        let prev_close = self.prev_close.replace(close)?;

        let delta = close - prev_close;
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        let n = self.period as f64;

        self.count += 1;

        if self.count <= self.period {
            self.gain_sum += gain;
            self.loss_sum += loss;
            if self.count < self.period {
                return None;
            }
            self.avg_gain = self.gain_sum / n;
            self.avg_loss = self.loss_sum / n;
        } else {
            self.avg_gain = (self.avg_gain * (n - 1.0) + gain) / n;
            self.avg_loss = (self.avg_loss * (n - 1.0) + loss) / n;
        }

        rsi_from_averages(self.avg_gain, self.avg_loss)
    }
}

/// RSI column for `closes`.
pub fn relative_strength_index(
    closes: &[f64],
    period: usize,
) -> Result<IndicatorSeries, IndicatorError> {
    let mut rsi = WilderRsi::new(period)?;
    Ok(closes.iter().map(|&close| rsi.next(close)).collect())
}

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// - Both averages zero (flat run): 50.0
/// - Average loss zero: 100.0
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    let rsi = if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    };

    rsi.is_finite().then(|| rsi.clamp(0.0, 100.0))
}
