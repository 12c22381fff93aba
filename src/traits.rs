//! Core traits for running aggregates
//!
//! Both the per-key [`AggregateState`](crate::aggregate::AggregateState) and the
//! whole [`AggregateTable`](crate::aggregate::AggregateTable) implement
//! [`Summary`], so partial results built over separate slices of input can be
//! combined later.

use core::fmt::Debug;

/// Core trait for mergeable running summaries
pub trait Summary: Clone + Debug {
    /// The type of item this summary folds in
    type Item<'a>;

    /// Fold one item into the summary
    fn update(&mut self, item: Self::Item<'_>);

    /// Merge another summary into this one
    ///
    /// The result must equal a summary built by observing both inputs in
    /// any order.
    fn merge(&mut self, other: &Self);

    /// Reset to the empty state
    fn clear(&mut self);

    /// Approximate memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of values observed
    fn count(&self) -> u64;

    /// Check if nothing was observed yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
