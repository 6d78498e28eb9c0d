use serde::{Deserialize, Serialize};

/// A per-bar indicator column aligned with a [`Series`](super::series::Series).
///
/// Positions where the indicator's lookback is not yet satisfied hold `None`,
/// which is never conflated with a computed `Some(0.0)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct IndicatorSeries(Vec<Option<f64>>);

impl IndicatorSeries {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }

    /// A column of `len` undefined values.
    pub fn undefined(len: usize) -> Self {
        Self(vec![None; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at bar `index`; `None` when undefined or out of range.
    pub fn at(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    /// Value at the last bar.
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied().flatten()
    }

    /// Value one bar before the last.
    pub fn previous(&self) -> Option<f64> {
        let len = self.0.len();
        if len < 2 {
            return None;
        }
        self.at(len - 2)
    }

    /// Index of the first defined value.
    pub fn first_defined(&self) -> Option<usize> {
        self.0.iter().position(Option::is_some)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Option<f64>>> for IndicatorSeries {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }
}

impl FromIterator<Option<f64>> for IndicatorSeries {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_is_distinct_from_zero() {
        let column = IndicatorSeries::new(vec![None, Some(0.0)]);
        assert_eq!(column.at(0), None);
        assert_eq!(column.at(1), Some(0.0));
        assert_eq!(column.first_defined(), Some(1));
    }

    #[test]
    fn test_last_and_previous() {
        let column = IndicatorSeries::new(vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(column.last(), Some(3.0));
        assert_eq!(column.previous(), None);
        assert_eq!(column.at(10), None);
    }

    #[test]
    fn test_serializes_undefined_as_null() {
        let column = IndicatorSeries::new(vec![None, Some(2.5)]);
        let json = serde_json::to_string(&column).expect("serializable");
        assert_eq!(json, "[null,2.5]");
    }
}
