//! Symbol frequency counting.

use crate::symbol::Symbol;
use std::collections::BTreeMap;

/// Occurrence count of every distinct symbol in a sequence.
///
/// Entries iterate in ascending symbol order. The sum of all counts equals
/// the length of the counted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: BTreeMap<S, u64>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count every symbol in `symbols`. An empty sequence yields an empty table.
    pub fn count<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut counts = BTreeMap::new();
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Build a table from explicit counts. Zero counts are dropped and
    /// repeated symbols are summed, saturating at `u64::MAX`.
    pub fn from_counts<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut counts = BTreeMap::new();
        for (symbol, count) in entries {
            if count > 0 {
                let entry = counts.entry(symbol).or_insert(0u64);
                *entry = entry.saturating_add(count);
            }
        }
        Self { counts }
    }

    /// Count of `symbol`, or 0 if absent.
    pub fn get(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Iterate `(symbol, count)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.counts.iter().map(|(s, &c)| (s, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text() {
        let table = FrequencyTable::count("aaabbc".chars());
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&'a'), 3);
        assert_eq!(table.get(&'b'), 2);
        assert_eq!(table.get(&'c'), 1);
        assert_eq!(table.get(&'z'), 0);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_count_empty() {
        let table = FrequencyTable::<char>::count(std::iter::empty());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_iteration_order() {
        let table = FrequencyTable::count(b"zyxzy".iter().copied());
        let order: Vec<u8> = table.iter().map(|(&s, _)| s).collect();
        assert_eq!(order, vec![b'x', b'y', b'z']);
    }

    #[test]
    fn test_from_counts() {
        let table = FrequencyTable::from_counts([('a', 2), ('b', 0), ('a', 3)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&'a'), 5);
    }

    #[test]
    fn test_from_counts_saturates() {
        let table = FrequencyTable::from_counts([('a', u64::MAX), ('a', 7), ('b', 1)]);
        assert_eq!(table.get(&'a'), u64::MAX);
        assert_eq!(table.total(), u64::MAX);
    }
}
