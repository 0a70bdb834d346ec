//! Error types for loading, aggregation and the dashboard runtime

use std::path::PathBuf;

/// Failure to turn the event log into an `EventTable`
///
/// Loads are all-or-nothing: the first bad record aborts the whole load.
#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    Io { path: PathBuf, source: std::io::Error },
    Csv(csv::Error),
    Empty(PathBuf),
    /// Record numbers are 1-based
    ColumnCount { record: u64, found: usize },
    InvalidValue { record: u64, raw: String },
    /// Parses as a float but is `inf`/`NaN`
    NonFiniteValue { record: u64, raw: String },
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            LoadError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            LoadError::Csv(e) => write!(f, "Malformed CSV: {}", e),
            LoadError::Empty(path) => write!(f, "No rows to load in {}", path.display()),
            LoadError::ColumnCount { record, found } => write!(
                f,
                "Record {} has {} columns, expected {}",
                record,
                found,
                crate::store::COLUMN_COUNT
            ),
            LoadError::InvalidValue { record, raw } => {
                write!(f, "Record {} has non-numeric value '{}'", record, raw)
            }
            LoadError::NonFiniteValue { record, raw } => {
                write!(f, "Record {} has non-finite value '{}'", record, raw)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

/// A derivation produced a value that cannot be ranked
#[derive(Debug, Clone, PartialEq)]
pub enum AggregationError {
    NonFinite { series: &'static str, game: String },
}

impl std::fmt::Display for AggregationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationError::NonFinite { series, game } => {
                write!(f, "Non-finite {} value for game '{}'", series, game)
            }
        }
    }
}

impl std::error::Error for AggregationError {}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level error for the binary
#[derive(Debug)]
pub enum DashboardError {
    Config(ConfigError),
    Load(LoadError),
    Aggregation(AggregationError),
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        DashboardError::Config(err)
    }
}

impl From<LoadError> for DashboardError {
    fn from(err: LoadError) -> Self {
        DashboardError::Load(err)
    }
}

impl From<AggregationError> for DashboardError {
    fn from(err: AggregationError) -> Self {
        DashboardError::Aggregation(err)
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err)
    }
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::Config(e) => write!(f, "{}", e),
            DashboardError::Load(e) => write!(f, "{}", e),
            DashboardError::Aggregation(e) => write!(f, "{}", e),
            DashboardError::Io(e) => write!(f, "IO error: {}", e),
            DashboardError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Config(e) => Some(e),
            DashboardError::Load(e) => Some(e),
            DashboardError::Aggregation(e) => Some(e),
            DashboardError::Io(e) => Some(e),
            DashboardError::Serialization(e) => Some(e),
        }
    }
}
