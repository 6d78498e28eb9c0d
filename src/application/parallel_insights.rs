use crate::application::insight_pipeline::InsightEngine;
use crate::domain::insights::InsightReport;
use crate::domain::ports::SeriesSource;
use anyhow::Result;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one symbol in a batch
#[derive(Debug, Clone)]
pub struct BatchInsightResult {
    pub symbol: String,
    pub result: Result<InsightReport, String>,
}

/// Generates reports for many symbols concurrently on rayon's thread pool.
///
/// Each symbol is loaded and analyzed independently; a failing source only
/// affects that symbol's entry. Results are returned in input order.
pub struct ParallelInsightRunner {
    source: Arc<dyn SeriesSource>,
    engine: Arc<InsightEngine>,
}

impl ParallelInsightRunner {
    pub fn new(source: Arc<dyn SeriesSource>, engine: Arc<InsightEngine>) -> Self {
        Self { source, engine }
    }

    pub fn run_parallel(&self, symbols: Vec<String>, period: &str) -> Vec<BatchInsightResult> {
        info!(
            "ParallelInsightRunner: {} symbols, period {}",
            symbols.len(),
            period
        );

        symbols
            .into_par_iter()
            .map(|symbol| {
                let result = self.run_single(&symbol, period).map_err(|e| {
                    warn!("ParallelInsightRunner: {} failed: {:#}", symbol, e);
                    format!("{:#}", e)
                });
                BatchInsightResult { symbol, result }
            })
            .collect()
    }

    fn run_single(&self, symbol: &str, period: &str) -> Result<InsightReport> {
        let series = self.source.load(symbol, period)?;
        Ok(self.engine.generate_insights(&series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::Bar;
    use crate::infrastructure::in_memory::InMemorySeriesSource;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn bars(len: usize) -> Vec<Bar> {
        (0..len)
            .map(|i| {
                let close = Decimal::from(50 + (i % 5) as i64);
                Bar::new(i as i64, close, close + dec!(1), close - dec!(1), close, dec!(100))
            })
            .collect()
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let source = InMemorySeriesSource::new();
        source.insert("AAA", bars(30));
        source.insert("CCC", bars(5));

        let runner = ParallelInsightRunner::new(
            Arc::new(source),
            Arc::new(InsightEngine::default()),
        );
        let results = runner.run_parallel(
            vec!["AAA".to_string(), "BBB".to_string(), "CCC".to_string()],
            "1mo",
        );

        let symbols: Vec<&str> = results.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAA", "BBB", "CCC"]);

        assert!(results[0].result.is_ok());
        assert!(
            results[1]
                .result
                .as_ref()
                .unwrap_err()
                .contains("No bars stored for BBB")
        );
        assert_eq!(results[2].result.as_ref().unwrap().period, "1mo");
    }
}
