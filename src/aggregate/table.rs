//! Key to running statistics mapping

use std::collections::hash_map::{self, HashMap};

use super::hash::KeyHashBuilder;
use super::snapshot::{KeyStats, Snapshot};
use super::state::AggregateState;
use crate::record::Record;
use crate::traits::Summary;

/// Running statistics for every distinct key seen so far
///
/// Memory grows with the number of distinct keys only. Each
/// [`ingest`](Self::ingest) is one hash lookup plus a constant-time update;
/// the owned key is allocated only the first time it is seen.
///
/// # Example
///
/// ```
/// use stationstats::aggregate::AggregateTable;
///
/// let mut table = AggregateTable::new();
/// table.ingest("A", 10.0);
/// table.ingest("A", 20.0);
/// table.ingest("B", -5.5);
///
/// let snapshot = table.snapshot();
/// assert_eq!(snapshot.len(), 2);
/// assert_eq!(snapshot.get("A").unwrap().mean, 15.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AggregateTable {
    /// Per-key state
    states: HashMap<String, AggregateState, KeyHashBuilder>,
    /// Total records ingested
    records: u64,
}

impl AggregateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table sized for `keys` distinct keys
    pub fn with_capacity(keys: usize) -> Self {
        Self {
            states: HashMap::with_capacity_and_hasher(keys, KeyHashBuilder),
            records: 0,
        }
    }

    /// Fold one value into the state for `key`
    #[inline]
    pub fn ingest(&mut self, key: &str, value: f64) {
        match self.states.get_mut(key) {
            Some(state) => state.add(value),
            None => {
                let mut state = AggregateState::new();
                state.add(value);
                self.states.insert(key.to_owned(), state);
            }
        }
        self.records += 1;
    }

    /// Fold a parsed record into the table
    #[inline]
    pub fn ingest_record(&mut self, record: Record<'_>) {
        self.ingest(record.key, record.value);
    }

    /// State for `key`, if it was ever seen
    pub fn get(&self, key: &str) -> Option<&AggregateState> {
        self.states.get(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if no key was seen yet
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over keys and states in no particular order
    pub fn iter(&self) -> hash_map::Iter<'_, String, AggregateState> {
        self.states.iter()
    }

    /// Finalize every key into min/mean/max
    ///
    /// Read-only; calling it again without further ingestion gives an equal
    /// snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.states
            .iter()
            .map(|(key, state)| (key.clone(), KeyStats::from(state)))
            .collect()
    }

    /// Finalize and drop the table, reusing its keys
    pub fn into_snapshot(self) -> Snapshot {
        self.states
            .into_iter()
            .map(|(key, state)| (key, KeyStats::from(&state)))
            .collect()
    }

    /// Merge another table key by key
    ///
    /// Keys present on only one side are carried over unchanged.
    pub fn merge_table(&mut self, other: &Self) {
        for (key, state) in &other.states {
            match self.states.get_mut(key.as_str()) {
                Some(existing) => existing.merge(state),
                None => {
                    self.states.insert(key.clone(), *state);
                }
            }
        }
        self.records += other.records;
    }
}

impl<'a> Extend<Record<'a>> for AggregateTable {
    fn extend<I: IntoIterator<Item = Record<'a>>>(&mut self, records: I) {
        for record in records {
            self.ingest_record(record);
        }
    }
}

impl<'a> FromIterator<Record<'a>> for AggregateTable {
    fn from_iter<I: IntoIterator<Item = Record<'a>>>(records: I) -> Self {
        let mut table = Self::new();
        table.extend(records);
        table
    }
}

impl<'a> IntoIterator for &'a AggregateTable {
    type Item = (&'a String, &'a AggregateState);
    type IntoIter = hash_map::Iter<'a, String, AggregateState>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Summary for AggregateTable {
    type Item<'a> = Record<'a>;

    fn update(&mut self, item: Record<'_>) {
        self.ingest_record(item);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_table(other);
    }

    fn clear(&mut self) {
        self.states.clear();
        self.records = 0;
    }

    fn size_bytes(&self) -> usize {
        let keys: usize = self.states.keys().map(String::capacity).sum();
        core::mem::size_of::<Self>()
            + self.states.capacity()
                * (core::mem::size_of::<String>() + core::mem::size_of::<AggregateState>())
            + keys
    }

    fn count(&self) -> u64 {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest() {
        let mut table = AggregateTable::new();
        table.ingest("A", 10.0);
        table.ingest("A", 20.0);
        table.ingest("B", -5.5);

        assert_eq!(table.len(), 2);
        assert_eq!(table.count(), 3);

        let a = table.get("A").unwrap();
        assert_eq!(a.count(), 2);
        assert_eq!(a.min(), 10.0);
        assert_eq!(a.max(), 20.0);
        assert_eq!(a.sum(), 30.0);

        let b = table.get("B").unwrap();
        assert_eq!(b.count(), 1);
        assert_eq!(b.sum(), -5.5);

        assert!(table.get("C").is_none());
    }

    #[test]
    fn test_empty() {
        let table = AggregateTable::new();

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.snapshot().is_empty());
        assert!(table.into_snapshot().is_empty());
    }

    #[test]
    fn test_snapshot_idempotent() {
        let mut table = AggregateTable::with_capacity(16);
        for (i, key) in ["x", "y", "z", "x", "y", "x"].iter().enumerate() {
            table.ingest(key, i as f64);
        }

        let first = table.snapshot();
        let second = table.snapshot();
        assert_eq!(first, second);
        assert_eq!(first, table.into_snapshot());
    }

    #[test]
    fn test_from_records() {
        let records = [
            Record { key: "A", value: 1.0 },
            Record { key: "B", value: 2.0 },
            Record { key: "A", value: 3.0 },
        ];
        let table: AggregateTable = records.into_iter().collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("A").unwrap().mean(), 2.0);
    }

    #[test]
    fn test_merge_disjoint_and_shared() {
        let mut t1 = AggregateTable::new();
        let mut t2 = AggregateTable::new();

        t1.ingest("A", 1.0);
        t1.ingest("B", 5.0);
        t2.ingest("B", -1.0);
        t2.ingest("C", 9.0);

        t1.merge(&t2);

        assert_eq!(t1.len(), 3);
        assert_eq!(t1.count(), 4);
        let b = t1.get("B").unwrap();
        assert_eq!(b.count(), 2);
        assert_eq!(b.min(), -1.0);
        assert_eq!(b.max(), 5.0);
        assert_eq!(t1.get("C").unwrap().sum(), 9.0);
    }

    #[test]
    fn test_update_via_trait() {
        fn fold<S: Summary>(summary: &mut S, items: Vec<S::Item<'_>>) {
            for item in items {
                summary.update(item);
            }
        }

        let mut table = AggregateTable::new();
        fold(
            &mut table,
            vec![
                Record { key: "A", value: 1.0 },
                Record { key: "A", value: 3.0 },
            ],
        );

        assert_eq!(table.count(), 2);
        assert_eq!(table.get("A").unwrap().mean(), 2.0);
    }

    #[test]
    fn test_clear() {
        let mut table = AggregateTable::new();
        table.ingest("A", 1.0);

        table.clear();

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_memory_bounded_by_keys() {
        let mut table = AggregateTable::new();
        for i in 0..100_000u64 {
            table.ingest(if i % 2 == 0 { "even" } else { "odd" }, i as f64);
        }
        let size = table.size_bytes();

        for i in 0..100_000u64 {
            table.ingest(if i % 2 == 0 { "even" } else { "odd" }, i as f64);
        }

        assert_eq!(table.len(), 2);
        assert_eq!(table.size_bytes(), size);
    }
}
