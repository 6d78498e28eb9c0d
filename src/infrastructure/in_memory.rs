//! In-memory series source, for tests and callers that already hold bars.

use crate::domain::market::{Bar, Series};
use crate::domain::ports::SeriesSource;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

#[derive(Default)]
pub struct InMemorySeriesSource {
    bars: RwLock<HashMap<String, Vec<Bar>>>,
}

impl InMemorySeriesSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bars` under `symbol`, replacing any previous entry.
    ///
    /// Entries are replaced whole, so a lock poisoned by a panicking holder
    /// still guards a consistent map and is recovered.
    pub fn insert(&self, symbol: impl Into<String>, bars: Vec<Bar>) {
        self.bars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(symbol.into(), bars);
    }
}

impl SeriesSource for InMemorySeriesSource {
    fn load(&self, symbol: &str, period: &str) -> Result<Series> {
        let map = self.bars.read().unwrap_or_else(PoisonError::into_inner);
        let bars = map
            .get(symbol)
            .cloned()
            .ok_or_else(|| anyhow!("No bars stored for {}", symbol))?;
        Ok(Series::new(symbol, period, bars)?)
    }
}
