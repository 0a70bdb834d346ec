//! Steam user activity dashboard
//!
//! Loads the purchase/play event log, derives six ranked chart series and
//! renders them in a terminal UI or as a JSON report.

pub mod aggregation;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod report;
pub mod store;
pub mod ui;

pub use aggregation::{recompute, ChartData, RankedSeries, TOP_N};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardView};
pub use error::{AggregationError, ConfigError, DashboardError, LoadError};
pub use store::{load_events, EventTable, TableCache};
