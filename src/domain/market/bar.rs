use crate::domain::errors::MalformedSeriesError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// One OHLCV observation.
///
/// `timestamp` is in unix milliseconds, like every other timestamp in the crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bar {
    pub timestamp: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl Bar {
    pub fn new(
        timestamp: i64,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Checks the per-bar invariants: positive prices, non-negative volume and
    /// `low <= {open, close} <= high`.
    ///
    /// `index` is only used to locate the bar in the returned error.
    pub fn validate(&self, index: usize) -> Result<(), MalformedSeriesError> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if value <= Decimal::ZERO {
                return Err(MalformedSeriesError::NonPositivePrice {
                    index,
                    field,
                    value,
                });
            }
        }

        if self.volume < Decimal::ZERO {
            return Err(MalformedSeriesError::NegativeVolume {
                index,
                volume: self.volume,
            });
        }

        if self.low > self.high {
            return Err(MalformedSeriesError::OhlcViolation {
                index,
                reason: format!("low {} > high {}", self.low, self.high),
            });
        }

        let body_high = self.open.max(self.close);
        if self.high < body_high {
            return Err(MalformedSeriesError::OhlcViolation {
                index,
                reason: format!("high {} below open/close {}", self.high, body_high),
            });
        }

        let body_low = self.open.min(self.close);
        if self.low > body_low {
            return Err(MalformedSeriesError::OhlcViolation {
                index,
                reason: format!("low {} above open/close {}", self.low, body_low),
            });
        }

        Ok(())
    }

    pub fn close_f64(&self) -> f64 {
        self.close.to_f64().unwrap_or(0.0)
    }

    pub fn high_f64(&self) -> f64 {
        self.high.to_f64().unwrap_or(0.0)
    }

    pub fn low_f64(&self) -> f64 {
        self.low.to_f64().unwrap_or(0.0)
    }

    pub fn volume_f64(&self) -> f64 {
        self.volume.to_f64().unwrap_or(0.0)
    }
}
