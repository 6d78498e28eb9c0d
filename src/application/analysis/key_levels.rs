use crate::domain::insights::KeyLevels;
use crate::domain::market::Series;

pub struct KeyLevelIdentifier;

impl KeyLevelIdentifier {
    /// Support = lowest low and resistance = highest high over the trailing `window` bars.
    ///
    /// A series shorter than `window` uses all of its bars. An empty series gives
    /// empty level lists.
    pub fn identify(series: &Series, window: usize) -> KeyLevels {
        let bars = series.bars();
        let start = bars.len().saturating_sub(window.max(1));
        let recent = &bars[start..];

        let support = recent
            .iter()
            .map(|bar| bar.low_f64())
            .min_by(f64::total_cmp);
        let resistance = recent
            .iter()
            .map(|bar| bar.high_f64())
            .max_by(f64::total_cmp);

        KeyLevels {
            support: support.into_iter().collect(),
            resistance: resistance.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::Bar;
    use rust_decimal::Decimal;

    fn series(ranges: &[(i64, i64)]) -> Series {
        let bars = ranges
            .iter()
            .enumerate()
            .map(|(i, &(low, high))| {
                let low = Decimal::from(low);
                let high = Decimal::from(high);
                Bar::new(i as i64, low, high, low, high, Decimal::ONE)
            })
            .collect();
        Series::new("TEST", "1mo", bars).unwrap()
    }

    #[test]
    fn test_trailing_window_only() {
        // The extreme first bar falls outside a 2-bar window
        let levels = KeyLevelIdentifier::identify(&series(&[(1, 100), (10, 20), (12, 18)]), 2);
        assert_eq!(levels.support, vec![10.0]);
        assert_eq!(levels.resistance, vec![20.0]);
    }

    #[test]
    fn test_window_clipped_to_available_bars() {
        let levels = KeyLevelIdentifier::identify(&series(&[(5, 9), (3, 7)]), 20);
        assert_eq!(levels.support, vec![3.0]);
        assert_eq!(levels.resistance, vec![9.0]);
    }

    #[test]
    fn test_empty_series() {
        let levels = KeyLevelIdentifier::identify(&Series::empty("X", "1mo"), 20);
        assert!(levels.support.is_empty());
        assert!(levels.resistance.is_empty());
    }
}
