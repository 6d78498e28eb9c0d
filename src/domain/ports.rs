use crate::domain::market::Series;
use anyhow::Result;

/// Supplier of validated series for the insight pipeline.
///
/// The pipeline never fetches data itself; callers inject an implementation
/// (file, network, in-memory) and hand the resulting [`Series`] to the engine.
pub trait SeriesSource: Send + Sync {
    fn load(&self, symbol: &str, period: &str) -> Result<Series>;
}
