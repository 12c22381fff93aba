//! Sorted fixed-precision rendering of a snapshot

use core::fmt;

use crate::aggregate::{KeyStats, Snapshot};

/// Digits after the decimal point unless configured otherwise
pub const DEFAULT_PRECISION: usize = 1;

/// One formatted output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    /// Group key, verbatim
    pub key: String,
    /// `<min>/<mean>/<max>`
    pub stats: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.stats)
    }
}

/// Turns a [`Snapshot`] into key-ordered [`ReportLine`]s
///
/// Numbers are rendered with Rust's `{:.N}` formatting: the decimal closest
/// to the exact binary value, exact ties resolved half to even. Negative
/// values that round to zero keep their sign (`-0.0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reporter {
    precision: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    /// Reporter with one decimal digit
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Reporter with `precision` decimal digits
    pub fn with_precision(precision: usize) -> Self {
        Self { precision }
    }

    /// Configured number of decimal digits
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Format every key, sorted by byte-wise key order
    pub fn format(&self, snapshot: &Snapshot) -> Vec<ReportLine> {
        let mut entries: Vec<(&String, &KeyStats)> = snapshot.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        entries
            .into_iter()
            .map(|(key, stats)| ReportLine {
                key: key.clone(),
                stats: self.format_stats(stats),
            })
            .collect()
    }

    /// Render one key's `<min>/<mean>/<max>`
    pub fn format_stats(&self, stats: &KeyStats) -> String {
        let p = self.precision;
        format!(
            "{:.p$}/{:.p$}/{:.p$}",
            stats.min,
            stats.mean,
            stats.max,
            p = p
        )
    }
}
