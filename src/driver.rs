//! Read, parse and ingest loop
//!
//! Pulls lines from a [`LineSource`], parses each one and folds it into a
//! freshly created [`AggregateTable`]. The table is created at the start of
//! [`Driver::run`] and handed back to the caller in the [`RunSummary`].

use tracing::{debug, warn};

use crate::aggregate::AggregateTable;
use crate::error::{DriverError, Result};
use crate::record::parse_bytes;
use crate::source::LineSource;

/// What to do with a line that fails to parse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop the run and return the error
    #[default]
    Abort,
    /// Count and log the line, then continue
    Skip,
}

/// Outcome of a completed run
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Table built over every well-formed line
    pub table: AggregateTable,
    /// Lines read, including skipped ones
    pub lines: u64,
    /// Malformed lines dropped under [`MalformedPolicy::Skip`]
    pub skipped: u64,
}

/// Single-threaded ingestion driver
#[derive(Clone, Copy, Debug, Default)]
pub struct Driver {
    policy: MalformedPolicy,
    /// Distinct keys to preallocate for
    capacity: usize,
}

impl Driver {
    /// Driver with the given malformed-line policy
    pub fn new(policy: MalformedPolicy) -> Self {
        Self {
            policy,
            capacity: 0,
        }
    }

    /// Preallocate the table for `keys` distinct keys
    pub fn with_capacity(mut self, keys: usize) -> Self {
        self.capacity = keys;
        self
    }

    /// Configured malformed-line policy
    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Consume `source` to the end
    pub fn run<S: LineSource>(&self, mut source: S) -> Result<RunSummary> {
        let mut table = AggregateTable::with_capacity(self.capacity);
        let mut lines = 0u64;
        let mut skipped = 0u64;

        while let Some(line) = source.next_line()? {
            lines += 1;
            match parse_bytes(line) {
                Ok(record) => table.ingest_record(record),
                Err(err) => match self.policy {
                    MalformedPolicy::Abort => {
                        return Err(DriverError::Malformed {
                            line: lines,
                            source: err,
                        });
                    }
                    MalformedPolicy::Skip => {
                        warn!(line = lines, error = %err, "skipping malformed line");
                        skipped += 1;
                    }
                },
            }
        }

        debug!(lines, skipped, keys = table.len(), "input exhausted");
        Ok(RunSummary {
            table,
            lines,
            skipped,
        })
    }
}
