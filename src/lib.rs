//! # stationstats
//!
//! Single-pass min/mean/max aggregation over very large `key;value` text files.
//!
//! Input is a stream of lines such as `Hamburg;12.0`. For every distinct key
//! the crate keeps a constant-size running state, so memory depends on the
//! number of keys and never on the number of lines. At end of input the states
//! are finalized and rendered in key order as `Hamburg: 3.4/12.0/24.1`.
//!
//! ## Pipeline
//!
//! - [`record`]: parse a line into a borrowed [`Record`]
//! - [`aggregate`]: fold records into an [`AggregateTable`], then take a
//!   [`Snapshot`]
//! - [`report`]: sort and format the snapshot with a [`Reporter`]
//! - [`source`] and [`driver`]: read lines from a file and run the loop
//!
//! ## Quick Start
//!
//! ```rust
//! use stationstats::prelude::*;
//!
//! let mut table = AggregateTable::new();
//! for line in ["A;10.0", "A;20.0", "B;-5.5"] {
//!     table.ingest_record(parse(line).unwrap());
//! }
//!
//! for line in Reporter::new().format(&table.snapshot()) {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Combining partial results
//!
//! Tables built over separate slices of input merge into the same result a
//! single table would have produced:
//!
//! ```rust
//! use stationstats::aggregate::AggregateTable;
//! use stationstats::traits::Summary;
//!
//! let mut left = AggregateTable::new();
//! let mut right = AggregateTable::new();
//!
//! left.ingest("A", 1.0);
//! right.ingest("A", 3.0);
//!
//! left.merge(&right);
//! assert_eq!(left.get("A").unwrap().mean(), 2.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization for [`AggregateState`] and [`Snapshot`]

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregate;
pub mod driver;
pub mod error;
pub mod record;
pub mod report;
pub mod source;
pub mod traits;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::aggregate::{AggregateState, AggregateTable, KeyStats, Snapshot};
    pub use crate::driver::{Driver, MalformedPolicy, RunSummary};
    pub use crate::error::{DriverError, ParseError};
    pub use crate::record::{parse, parse_bytes, Record};
    pub use crate::report::{ReportLine, Reporter};
    pub use crate::source::{BufReadSource, LineSource, MmapSource};
}

pub use aggregate::{AggregateState, AggregateTable, KeyStats, Snapshot};
pub use record::Record;
pub use report::Reporter;
