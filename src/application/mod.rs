// Technical indicators over a series
pub mod indicators;

// Statistics, signals, trend, key levels, risk and alerts
pub mod analysis;

// Report orchestration
pub mod insight_pipeline;
pub mod parallel_insights;
