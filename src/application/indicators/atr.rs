use crate::domain::errors::IndicatorError;
use crate::domain::market::IndicatorSeries;

/// Average True Range with Wilder's smoothing.
///
/// The first bar's true range is `high - low` (no previous close). The first ATR
/// is the mean of the first `period` true ranges; later values use
/// `atr = (prev_atr * (period - 1) + tr) / period`.
pub struct WilderAtr {
    period: usize,
    prev_close: Option<f64>,
    tr_sum: f64,
    atr: Option<f64>,
    count: usize,
}

impl WilderAtr {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidPeriod {
                indicator: "ATR",
                period,
            });
        }
        Ok(Self {
            period,
            prev_close: None,
            tr_sum: 0.0,
            atr: None,
            count: 0,
        })
    }

    pub fn next(&mut self, high: f64, low: f64, close: f64) -> Option<f64> {
        let tr = match self.prev_close {
            Some(prev_close) => (high - low)
                .max((high - prev_close).abs())
                .max((low - prev_close).abs()),
            None => high - low,
        };
        self.prev_close = Some(close);
        self.count += 1;

        let n = self.period as f64;
        let atr = match self.atr {
            Some(prev_atr) => (prev_atr * (n - 1.0) + tr) / n,
            None => {
                self.tr_sum += tr;
                if self.count < self.period {
                    return None;
                }
                self.tr_sum / n
            }
        };

        self.atr = Some(atr);
        Some(atr)
    }
}

/// ATR column from parallel high/low/close slices.
pub fn average_true_range(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Result<IndicatorSeries, IndicatorError> {
    if highs.len() != closes.len() || lows.len() != closes.len() {
        return Err(IndicatorError::InvalidParameters {
            indicator: "ATR",
            reason: format!(
                "mismatched input lengths: high {}, low {}, close {}",
                highs.len(),
                lows.len(),
                closes.len()
            ),
        });
    }

    let mut atr = WilderAtr::new(period)?;
    Ok(highs
        .iter()
        .zip(lows)
        .zip(closes)
        .map(|((&high, &low), &close)| atr.next(high, low, close))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_true_range_uses_high_low() {
        let atr = average_true_range(&[12.0], &[10.0], &[11.0], 1).unwrap();
        assert_eq!(atr.at(0), Some(2.0));
    }

    #[test]
    fn test_gap_extends_true_range() {
        // Second bar gaps up: |high - prev_close| = 20 - 11 = 9 > high - low = 1
        let atr = average_true_range(&[12.0, 20.0], &[10.0, 19.0], &[11.0, 19.5], 2).unwrap();
        assert_eq!(atr.at(0), None);
        assert_eq!(atr.at(1), Some((2.0 + 9.0) / 2.0));
    }

    #[test]
    fn test_wilder_smoothing() {
        let highs = [11.0, 11.0, 11.0, 13.0];
        let lows = [9.0, 9.0, 9.0, 9.0];
        let closes = [10.0, 10.0, 10.0, 10.0];
        let atr = average_true_range(&highs, &lows, &closes, 3).unwrap();

        assert_eq!(atr.first_defined(), Some(2));
        assert_eq!(atr.at(2), Some(2.0));
        // (2 * 2 + 4) / 3
        assert!((atr.at(3).unwrap() - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        assert!(average_true_range(&[1.0, 2.0], &[1.0], &[1.0, 2.0], 14).is_err());
    }
}
