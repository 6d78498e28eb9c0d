use rustinsight::application::insight_pipeline::InsightEngine;
use rustinsight::application::parallel_insights::ParallelInsightRunner;
use rustinsight::domain::config::InsightConfig;
use rustinsight::infrastructure::CsvSeriesSource;
use std::fmt::Write as _;
use std::sync::Arc;
use tempfile::TempDir;

fn write_symbol(dir: &TempDir, symbol: &str, closes: &[f64]) {
    let mut body = String::from("timestamp,open,high,low,close,volume\n");
    for (i, close) in closes.iter().enumerate() {
        writeln!(
            body,
            "{},{:.2},{:.2},{:.2},{:.2},{}",
            i as i64 * 86_400_000,
            close,
            close + 1.0,
            close - 1.0,
            close,
            1000 + i * 10
        )
        .unwrap();
    }
    std::fs::write(dir.path().join(format!("{}.csv", symbol)), body).unwrap();
}

#[test]
fn test_batch_from_csv_directory() {
    let dir = TempDir::new().unwrap();
    let rising: Vec<f64> = (0..40).map(|i| 50.0 + i as f64 * 0.5).collect();
    write_symbol(&dir, "AAPL", &rising);
    write_symbol(&dir, "MSFT", &[300.0; 25]);
    std::fs::write(
        dir.path().join("BROKEN.csv"),
        "timestamp,open,high,low,close,volume\n1,10,9,8,10,1\n",
    )
    .unwrap();

    let runner = ParallelInsightRunner::new(
        Arc::new(CsvSeriesSource::new(dir.path())),
        Arc::new(InsightEngine::default()),
    );
    let results = runner.run_parallel(
        vec![
            "AAPL".to_string(),
            "MSFT".to_string(),
            "BROKEN".to_string(),
            "MISSING".to_string(),
        ],
        "3mo",
    );

    let aapl = results[0].result.as_ref().unwrap();
    assert_eq!(aapl.symbol, "AAPL");
    assert_eq!(aapl.period, "3mo");
    let stats = aapl.statistics.as_ref().unwrap();
    assert!((stats.current_price - 69.5).abs() < 1e-9);

    let msft = results[1].result.as_ref().unwrap();
    assert_eq!(msft.risk_metrics.sharpe_ratio, None);

    let broken = results[2].result.as_ref().unwrap_err();
    assert!(broken.contains("Malformed series"));
    assert!(broken.contains("OHLC"));

    assert!(results[3].result.is_err());
}

#[test]
fn test_toml_config_drives_alert_thresholds() {
    let config: InsightConfig = toml::from_str(
        r#"
        [alerts]
        volume_spike = 1.0
        "#,
    )
    .unwrap();
    config.validate().unwrap();

    let dir = TempDir::new().unwrap();
    write_symbol(&dir, "VOL", &[20.0; 30]);

    let runner = ParallelInsightRunner::new(
        Arc::new(CsvSeriesSource::new(dir.path())),
        Arc::new(InsightEngine::new(config)),
    );
    let results = runner.run_parallel(vec!["VOL".to_string()], "1mo");
    let report = results[0].result.as_ref().unwrap();

    // Volume grows 10 per bar, so the last bar sits above its trailing average
    assert!(
        report
            .alert_messages()
            .iter()
            .any(|m| m.starts_with("Unusual volume"))
    );
}
