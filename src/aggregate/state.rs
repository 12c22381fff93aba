//! Per-key running statistics (count, min, max, sum)

use crate::traits::Summary;

/// Running min/max/sum/count for one key
///
/// Starts from infinity sentinels (`min = +inf`, `max = -inf`) so the
/// per-value update is branch-free and needs no `Option` fields.
///
/// # Example
///
/// ```
/// use stationstats::aggregate::AggregateState;
///
/// let mut state = AggregateState::new();
///
/// for value in [10.0, 20.0, 30.0] {
///     state.add(value);
/// }
///
/// assert_eq!(state.min(), 10.0);
/// assert_eq!(state.max(), 30.0);
/// assert_eq!(state.mean(), 20.0);
/// ```
///
/// # Merging
///
/// ```
/// use stationstats::aggregate::AggregateState;
/// use stationstats::traits::Summary;
///
/// let mut left = AggregateState::new();
/// let mut right = AggregateState::new();
///
/// left.add(1.0);
/// right.add(3.0);
///
/// left.merge(&right);
/// assert_eq!(left.count(), 2);
/// assert_eq!(left.mean(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateState {
    /// Number of values seen
    count: u64,
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
    /// Running total
    sum: f64,
}

impl Default for AggregateState {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateState {
    /// Create an empty state
    pub const fn new() -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
        }
    }

    /// Add a value
    ///
    /// `value` must not be NaN; the parser rejects NaN before it gets here.
    #[inline]
    pub fn add(&mut self, value: f64) {
        debug_assert!(!value.is_nan(), "NaN reached the aggregate table");

        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Minimum value, `+inf` while empty
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum value, `-inf` while empty
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sum of all values
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Arithmetic mean, NaN while empty
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Merge with another state
    ///
    /// Pairwise min, pairwise max, summed sum and summed count.
    pub fn merge_state(&mut self, other: &Self) {
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

impl Summary for AggregateState {
    type Item<'a> = f64;

    fn update(&mut self, item: f64) {
        self.add(item);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_state(other);
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}
