//! Insight report CLI
//!
//! Loads OHLCV series from `<data-dir>/<SYMBOL>.csv`, runs the insight pipeline
//! for every symbol in parallel and prints each report as JSON on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use rustinsight::application::insight_pipeline::InsightEngine;
use rustinsight::application::parallel_insights::ParallelInsightRunner;
use rustinsight::config::Config;
use rustinsight::domain::config::InsightConfig;
use rustinsight::infrastructure::csv_source::CsvSeriesSource;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "OHLCV insight report generator", long_about = None)]
struct Args {
    /// Symbols to analyze (one CSV file per symbol)
    #[arg(required = true)]
    symbols: Vec<String>,

    /// Directory containing <SYMBOL>.csv files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Period label attached to each report (e.g. 1mo, 6mo, 1y)
    #[arg(long, default_value = "6mo")]
    period: String,

    /// TOML file with insight configuration; overrides environment settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let env_config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays valid JSON
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&env_config.logging.level)),
        )
        .with_ansi(env_config.logging.ansi)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let args = Args::parse();

    let insight_config = match &args.config {
        Some(path) => {
            info!("Loading insight config from: {}", path.display());
            load_config_from_toml(path)?
        }
        None => env_config.to_insight_config()?,
    };

    let runner = ParallelInsightRunner::new(
        Arc::new(CsvSeriesSource::new(&args.data_dir)),
        Arc::new(InsightEngine::new(insight_config)),
    );
    let results = runner.run_parallel(args.symbols, &args.period);

    let mut failures = 0;
    for batch in &results {
        match &batch.result {
            Ok(report) => println!(
                "{}",
                serde_json::to_string_pretty(report).context("Failed to serialize report")?
            ),
            Err(e) => {
                failures += 1;
                error!("{}: {}", batch.symbol, e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} symbols failed", failures, results.len());
    }
    Ok(())
}

fn load_config_from_toml(path: &Path) -> Result<InsightConfig> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read insight config file: {}", path.display()))?;
    let config: InsightConfig = toml::from_str(&content)
        .context(format!("Failed to parse insight config TOML: {}", path.display()))?;
    config
        .validate()
        .context(format!("Invalid insight config in {}", path.display()))?;
    Ok(config)
}
