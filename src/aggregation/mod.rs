//! Aggregation Pipeline - six ranked series over the event table
//!
//! ```text
//! EventTable
//!     ├─ action_distribution  (Purchase / Play row counts)
//!     ├─ most_played          (play rows per game)
//!     ├─ most_purchased       (purchase rows per game)
//!     ├─ average_playtime     (mean hours per game)
//!     └─ stickiness           (play hours / purchase rows)
//!            ↓
//!        ChartData
//! ```

pub mod derivations;
pub mod distribution;
pub mod pipeline;
pub mod series;

pub use derivations::{average_playtime, most_played, most_purchased, stickiness};
pub use distribution::{action_distribution, ActionDistribution};
pub use pipeline::{recompute, ChartData};
pub use series::{rank_top, RankedSeries, SeriesPoint, TOP_N};
