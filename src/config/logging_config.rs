//! Logging configuration parsing from environment variables.

use super::VarLookup;

/// Logging environment configuration
#[derive(Debug, Clone)]
pub struct LoggingEnvConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub level: String,
    pub ansi: bool,
}

impl Default for LoggingEnvConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl LoggingEnvConfig {
    pub fn from_vars(vars: VarLookup) -> Self {
        let defaults = Self::default();
        Self {
            level: vars("LOG_LEVEL").unwrap_or(defaults.level),
            ansi: vars("LOG_ANSI")
                .and_then(|v| v.parse::<bool>().ok())
                .unwrap_or(defaults.ansi),
        }
    }
}
