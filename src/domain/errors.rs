use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when raw bars cannot form a valid series
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MalformedSeriesError {
    #[error("Duplicate timestamp {timestamp} at bar {index}")]
    DuplicateTimestamp { index: usize, timestamp: i64 },

    #[error("Non-monotonic timestamp at bar {index}: {current} follows {previous}")]
    NonMonotonicTimestamp {
        index: usize,
        previous: i64,
        current: i64,
    },

    #[error("Non-positive {field} at bar {index}: {value}")]
    NonPositivePrice {
        index: usize,
        field: &'static str,
        value: Decimal,
    },

    #[error("Negative volume at bar {index}: {volume}")]
    NegativeVolume { index: usize, volume: Decimal },

    #[error("OHLC invariant violated at bar {index}: {reason}")]
    OhlcViolation { index: usize, reason: String },
}

/// Errors local to the computation of a single indicator column
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IndicatorError {
    #[error("Invalid period for {indicator}: {period}. Must be positive")]
    InvalidPeriod {
        indicator: &'static str,
        period: usize,
    },

    #[error("Invalid parameters for {indicator}: {reason}")]
    InvalidParameters {
        indicator: &'static str,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_malformed_series_formatting() {
        let error = MalformedSeriesError::NonMonotonicTimestamp {
            index: 3,
            previous: 2000,
            current: 1000,
        };

        let msg = error.to_string();
        assert!(msg.contains("bar 3"));
        assert!(msg.contains("1000"));
        assert!(msg.contains("2000"));
    }

    #[test]
    fn test_non_positive_price_formatting() {
        let error = MalformedSeriesError::NonPositivePrice {
            index: 0,
            field: "close",
            value: dec!(-1.5),
        };
        assert_eq!(error.to_string(), "Non-positive close at bar 0: -1.5");
    }

    #[test]
    fn test_indicator_error_formatting() {
        let error = IndicatorError::InvalidPeriod {
            indicator: "RSI",
            period: 0,
        };
        assert!(error.to_string().contains("RSI"));
    }
}
