//! Report formatting
//!
//! Converts a finalized [`Snapshot`](crate::aggregate::Snapshot) into lines
//! ordered by key, each rendered as `<key>: <min>/<mean>/<max>`. No I/O
//! happens here; callers decide where the lines go.
//!
//! # Example
//!
//! ```
//! use stationstats::aggregate::AggregateTable;
//! use stationstats::report::Reporter;
//!
//! let mut table = AggregateTable::new();
//! table.ingest("B", -5.5);
//! table.ingest("A", 10.0);
//! table.ingest("A", 20.0);
//!
//! let lines = Reporter::new().format(&table.snapshot());
//! assert_eq!(lines[0].to_string(), "A: 10.0/15.0/20.0");
//! assert_eq!(lines[1].to_string(), "B: -5.5/-5.5/-5.5");
//! ```

mod format;

pub use format::{ReportLine, Reporter, DEFAULT_PRECISION};
