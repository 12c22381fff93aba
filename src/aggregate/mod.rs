//! Single-pass aggregation
//!
//! This module holds the core of the crate: an [`AggregateTable`] that turns
//! an unbounded stream of `(key, value)` pairs into per-key running
//! statistics in constant time per value and memory proportional to the
//! number of distinct keys.
//!
//! # Example
//!
//! ```
//! use stationstats::aggregate::AggregateTable;
//!
//! let mut table = AggregateTable::new();
//!
//! for (key, value) in [("A", 10.0), ("A", 20.0), ("B", -5.5)] {
//!     table.ingest(key, value);
//! }
//!
//! let snapshot = table.snapshot();
//! let a = snapshot.get("A").unwrap();
//! println!("A: min {} mean {} max {}", a.min, a.mean, a.max);
//! ```

mod hash;
mod snapshot;
mod state;
mod table;

pub use snapshot::{KeyStats, Snapshot};
pub use state::AggregateState;
pub use table::AggregateTable;
