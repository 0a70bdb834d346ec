//! Dashboard configuration from environment variables

use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_PATH: &str = "steam-200k.csv";
pub const DEFAULT_TICK_MS: u64 = 250;

/// Configuration loaded from environment variables (and `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Event log to load
    pub data_path: PathBuf,

    /// Keyboard poll interval for the terminal UI
    pub tick_ms: u64,
}

impl DashboardConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `STEAMDASH_DATA_PATH` (default: steam-200k.csv)
    /// - `STEAMDASH_TICK_MS` (default: 250, must be > 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup("STEAMDASH_DATA_PATH")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
            .into();

        let tick_ms = match lookup("STEAMDASH_TICK_MS") {
            Some(raw) => parse_tick(&raw)?,
            None => DEFAULT_TICK_MS,
        };

        Ok(Self {
            data_path,
            tick_ms,
        })
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.into(),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// Parse a poll interval in milliseconds; zero is rejected
pub fn parse_tick(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidValue(format!(
            "STEAMDASH_TICK_MS must be a positive integer, got '{}'",
            raw
        ))),
    }
}
