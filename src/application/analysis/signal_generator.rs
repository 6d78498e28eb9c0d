use crate::domain::config::SignalThresholds;
use crate::domain::market::AugmentedSeries;
use std::fmt;

/// Signal rules in evaluation order; the order is part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalRule {
    RsiOversold,
    RsiOverbought,
    MacdBullishCrossover,
    MacdBearishCrossover,
}

impl SignalRule {
    pub const ALL: [SignalRule; 4] = [
        SignalRule::RsiOversold,
        SignalRule::RsiOverbought,
        SignalRule::MacdBullishCrossover,
        SignalRule::MacdBearishCrossover,
    ];

    /// `None` when an input is undefined (rule skipped), otherwise whether it fires.
    fn evaluate(&self, augmented: &AugmentedSeries, thresholds: &SignalThresholds) -> Option<bool> {
        let ind = &augmented.indicators;
        match self {
            SignalRule::RsiOversold => Some(ind.rsi.last()? < thresholds.rsi_oversold),
            SignalRule::RsiOverbought => Some(ind.rsi.last()? > thresholds.rsi_overbought),
            SignalRule::MacdBullishCrossover | SignalRule::MacdBearishCrossover => {
                let macd = ind.macd_line.last()?;
                let signal = ind.macd_signal.last()?;
                let prev_macd = ind.macd_line.previous()?;
                let prev_signal = ind.macd_signal.previous()?;

                Some(if *self == SignalRule::MacdBullishCrossover {
                    macd > signal && prev_macd <= prev_signal
                } else {
                    macd < signal && prev_macd >= prev_signal
                })
            }
        }
    }
}

impl fmt::Display for SignalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalRule::RsiOversold => write!(f, "RSI indicates oversold conditions"),
            SignalRule::RsiOverbought => write!(f, "RSI indicates overbought conditions"),
            SignalRule::MacdBullishCrossover => write!(f, "MACD bullish crossover"),
            SignalRule::MacdBearishCrossover => write!(f, "MACD bearish crossover"),
        }
    }
}

pub struct SignalGenerator;

impl SignalGenerator {
    /// Messages of every rule that fires at the last bar, in [`SignalRule::ALL`] order.
    pub fn generate(augmented: &AugmentedSeries, thresholds: &SignalThresholds) -> Vec<String> {
        SignalRule::ALL
            .iter()
            .filter(|rule| rule.evaluate(augmented, thresholds) == Some(true))
            .map(|rule| rule.to_string())
            .collect()
    }
}
