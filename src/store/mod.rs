//! Event Store - immutable in-memory table of Steam user events
//!
//! # Architecture
//!
//! ```text
//! steam-200k.csv → load_events → EventTable
//!     ↓
//! TableCache (memoized per path, invalidated on mtime change / clear)
//!     ↓
//! Arc<EventTable> shared with the aggregation pipeline
//! ```

pub mod cache;
pub mod event;
pub mod loader;

pub use cache::TableCache;
pub use event::{Action, Event, EventTable};
pub use loader::load_events;

/// Number of positional columns in the source log
pub const COLUMN_COUNT: usize = 5;
