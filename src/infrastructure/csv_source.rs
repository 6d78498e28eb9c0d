//! CSV series source
//!
//! Reads `<data_dir>/<SYMBOL>.csv` with a header row
//! `timestamp,open,high,low,close,volume` (timestamp in unix milliseconds).
//! Rows are taken in file order and validated into a [`Series`].

use crate::domain::market::{Bar, Series};
use crate::domain::ports::SeriesSource;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct BarRecord {
    timestamp: i64,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: Decimal,
}

impl From<BarRecord> for Bar {
    fn from(r: BarRecord) -> Self {
        Bar::new(r.timestamp, r.open, r.high, r.low, r.close, r.volume)
    }
}

pub struct CsvSeriesSource {
    data_dir: PathBuf,
}

impl CsvSeriesSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", symbol))
    }

    /// Parse bars from any CSV file with the expected header.
    pub fn read_bars(path: &Path) -> Result<Vec<Bar>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mut rdr = csv::Reader::from_reader(BufReader::new(file));

        let mut bars = Vec::new();
        for (row, result) in rdr.deserialize::<BarRecord>().enumerate() {
            let record = result
                .with_context(|| format!("Invalid row {} in {}", row + 1, path.display()))?;
            bars.push(record.into());
        }
        Ok(bars)
    }
}

impl SeriesSource for CsvSeriesSource {
    fn load(&self, symbol: &str, period: &str) -> Result<Series> {
        let path = self.path_for(symbol);
        let bars = Self::read_bars(&path)?;
        debug!("CsvSeriesSource: read {} bars from {}", bars.len(), path.display());

        Series::new(symbol, period, bars)
            .with_context(|| format!("Malformed series in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, symbol: &str, body: &str) {
        let mut file = File::create(dir.path().join(format!("{}.csv", symbol))).unwrap();
        writeln!(file, "timestamp,open,high,low,close,volume").unwrap();
        write!(file, "{}", body).unwrap();
    }

    #[test]
    fn test_load_valid_file() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "AAPL",
            "1000,100.0,101.5,99.5,101.0,12000\n2000,101.0,102.0,100.0,101.5,9000\n",
        );

        let series = CsvSeriesSource::new(dir.path()).load("AAPL", "6mo").unwrap();
        assert_eq!(series.symbol(), "AAPL");
        assert_eq!(series.period(), "6mo");
        assert_eq!(series.len(), 2);
        assert_eq!(series.bars()[0].high, dec!(101.5));
        assert_eq!(series.bars()[1].volume, dec!(9000));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = CsvSeriesSource::new(dir.path())
            .load("NOPE", "1mo")
            .unwrap_err();
        assert!(err.to_string().contains("NOPE.csv"));
    }

    #[test]
    fn test_unordered_rows_rejected() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, "TSLA", "2000,10,11,9,10,5\n1000,10,11,9,10,5\n");

        let err = CsvSeriesSource::new(dir.path())
            .load("TSLA", "1mo")
            .unwrap_err();
        assert!(err.to_string().contains("Malformed series"));
    }

    #[test]
    fn test_bad_number_reports_row() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, "ETH", "1000,10,11,9,abc,5\n");

        let err = CsvSeriesSource::new(dir.path())
            .load("ETH", "1mo")
            .unwrap_err();
        assert!(err.to_string().contains("Invalid row 1"));
    }
}
