//! Threshold alerts
//!
//! A fixed registry of conditions, each reading one scalar from the latest bar
//! (or from the statistics) and pairing a trigger predicate with a message
//! formatter. Conditions whose input is undefined are skipped.

use crate::domain::config::AlertThresholds;
use crate::domain::insights::{Alert, AlertKind, Statistics};
use crate::domain::market::AugmentedSeries;
use tracing::debug;

/// Scalars the alert conditions read, resolved once per evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertInputs {
    /// Latest one-bar return as a fraction
    pub latest_return: Option<f64>,
    /// Latest volume over the volume moving average of the preceding bar
    pub volume_ratio: Option<f64>,
    /// Standard deviation of daily returns
    pub daily_volatility: Option<f64>,
    pub rsi: Option<f64>,
    /// SMA20 - SMA50 at the latest bar
    pub ma_gap: Option<f64>,
}

impl AlertInputs {
    pub fn resolve(augmented: &AugmentedSeries, statistics: Option<&Statistics>) -> Self {
        let closes = augmented.closes();
        let ind = &augmented.indicators;

        let latest_return = match closes {
            [.., prev, last] if *prev > 0.0 => Some(last / prev - 1.0),
            _ => None,
        };

        // The moving average at the latest bar already includes the latest
        // volume; the spike is measured against the average that precedes it.
        let volume_ratio = augmented
            .series()
            .last()
            .map(|bar| bar.volume_f64())
            .zip(ind.volume_ma.previous())
            .filter(|(_, avg)| *avg > 0.0)
            .map(|(volume, avg)| volume / avg);

        let ma_gap = ind
            .sma_20
            .last()
            .zip(ind.sma_50.last())
            .map(|(short, long)| short - long);

        Self {
            latest_return,
            volume_ratio,
            daily_volatility: statistics.and_then(|s| s.daily_returns.std),
            rsi: ind.rsi.last(),
            ma_gap,
        }
    }
}

/// One registry entry: input selector, trigger predicate and message formatter.
pub struct AlertCondition {
    pub kind: AlertKind,
    input: fn(&AlertInputs) -> Option<f64>,
    triggered: fn(f64, &AlertThresholds) -> bool,
    message: fn(f64) -> String,
}

impl AlertCondition {
    fn check(&self, inputs: &AlertInputs, thresholds: &AlertThresholds) -> Option<Alert> {
        let value = (self.input)(inputs)?;
        (self.triggered)(value, thresholds).then(|| Alert {
            kind: self.kind,
            value,
            message: (self.message)(value),
        })
    }
}

fn condition(kind: AlertKind) -> AlertCondition {
    match kind {
        AlertKind::PriceChange => AlertCondition {
            kind,
            input: |i| i.latest_return,
            triggered: |x, t| x.abs() > t.price_change,
            message: |x| format!("Significant price movement: {:.2}%", x * 100.0),
        },
        AlertKind::VolumeSpike => AlertCondition {
            kind,
            input: |i| i.volume_ratio,
            triggered: |x, t| x > t.volume_spike,
            message: |x| format!("Unusual volume: {:.1}x above average", x),
        },
        AlertKind::Volatility => AlertCondition {
            kind,
            input: |i| i.daily_volatility,
            triggered: |x, t| x > t.volatility,
            message: |x| format!("High volatility: {:.1}% daily range", x * 100.0),
        },
        AlertKind::RsiOverbought => AlertCondition {
            kind,
            input: |i| i.rsi,
            triggered: |x, t| x > t.rsi_overbought,
            message: |x| format!("Overbought conditions (RSI: {:.1})", x),
        },
        AlertKind::RsiOversold => AlertCondition {
            kind,
            input: |i| i.rsi,
            triggered: |x, t| x < t.rsi_oversold,
            message: |x| format!("Oversold conditions (RSI: {:.1})", x),
        },
        AlertKind::MaCrossover => AlertCondition {
            kind,
            input: |i| i.ma_gap,
            triggered: |x, t| x.abs() < t.ma_crossover,
            message: |_| "Moving average crossover detected".to_string(),
        },
    }
}

pub struct AlertEngine {
    thresholds: AlertThresholds,
    conditions: Vec<AlertCondition>,
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new(AlertThresholds::default())
    }
}

impl AlertEngine {
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self {
            thresholds,
            conditions: AlertKind::ALL.into_iter().map(condition).collect(),
        }
    }

    /// Registered condition names in evaluation order.
    pub fn registry(&self) -> Vec<&'static str> {
        self.conditions.iter().map(|c| c.kind.name()).collect()
    }

    /// Evaluate every condition against the latest bar, in registry order.
    pub fn evaluate(
        &self,
        augmented: &AugmentedSeries,
        statistics: Option<&Statistics>,
    ) -> Vec<Alert> {
        self.evaluate_inputs(&AlertInputs::resolve(augmented, statistics))
    }

    /// Evaluate pre-resolved inputs.
    ///
    /// At most one RSI alert fires: once `rsi_overbought` triggers, `rsi_oversold`
    /// is not checked.
    pub fn evaluate_inputs(&self, inputs: &AlertInputs) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = Vec::new();

        for condition in &self.conditions {
            if condition.kind == AlertKind::RsiOversold
                && alerts.iter().any(|a| a.kind == AlertKind::RsiOverbought)
            {
                continue;
            }
            if let Some(alert) = condition.check(inputs, &self.thresholds) {
                debug!("Alert {} triggered: {}", alert.kind, alert.message);
                alerts.push(alert);
            }
        }

        alerts
    }
}
