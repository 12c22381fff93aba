//! Finalized, read-only view of a table

use std::collections::hash_map::{self, HashMap};

use super::hash::KeyHashBuilder;
use super::state::AggregateState;

/// Final statistics for one key
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyStats {
    /// Smallest value seen
    pub min: f64,
    /// `sum / count`
    pub mean: f64,
    /// Largest value seen
    pub max: f64,
    /// Number of values, always at least one
    pub count: u64,
}

impl From<&AggregateState> for KeyStats {
    fn from(state: &AggregateState) -> Self {
        use crate::traits::Summary;

        Self {
            min: state.min(),
            mean: state.mean(),
            max: state.max(),
            count: state.count(),
        }
    }
}

/// Key to [`KeyStats`] mapping, unordered
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Snapshot {
    entries: HashMap<String, KeyStats, KeyHashBuilder>,
}

impl Snapshot {
    /// Statistics for `key`
    pub fn get(&self, key: &str) -> Option<&KeyStats> {
        self.entries.get(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the snapshot holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in no particular order
    pub fn iter(&self) -> hash_map::Iter<'_, String, KeyStats> {
        self.entries.iter()
    }
}

impl FromIterator<(String, KeyStats)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, KeyStats)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a String, &'a KeyStats);
    type IntoIter = hash_map::Iter<'a, String, KeyStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_state() {
        let mut state = AggregateState::new();
        for v in [1.0, 1.0, 1.0] {
            state.add(v);
        }

        let stats = KeyStats::from(&state);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.mean, 1.0);
        assert_eq!(stats.max, 1.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_collect() {
        let one = KeyStats {
            min: 1.0,
            mean: 1.0,
            max: 1.0,
            count: 1,
        };
        let snapshot: Snapshot = [("a".to_string(), one), ("b".to_string(), one)]
            .into_iter()
            .collect();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("a"), Some(&one));
        assert!(snapshot.get("c").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let mut state = AggregateState::new();
        state.add(-5.5);
        let snapshot: Snapshot = [("B".to_string(), KeyStats::from(&state))]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
