//! Symbol frequency storage.
//!
//! Counts live in an `AHashMap` for fast accumulation. Anything that feeds
//! the tree builder goes through [`FrequencyTable::sorted`], so hash
//! iteration order never influences which codes come out.

use ahash::AHashMap;
use compact_str::CompactString;

/// A command name as it appears in the input sequence.
pub type Symbol = CompactString;

/// Mapping from symbol to its number of occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: AHashMap<Symbol, u64>,
}

impl FrequencyTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            counts: AHashMap::new(),
        }
    }

    /// Create a new table with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: AHashMap::with_capacity(capacity),
        }
    }

    /// Record `count` more occurrences of `symbol`.
    ///
    /// Adding zero occurrences is a no-op, so every stored count stays
    /// positive.
    pub fn add(&mut self, symbol: &str, count: u64) {
        if count == 0 {
            return;
        }
        if let Some(existing) = self.counts.get_mut(symbol) {
            *existing += count;
        } else {
            self.counts.insert(CompactString::new(symbol), count);
        }
    }

    /// Record one occurrence of `symbol`.
    #[inline]
    pub fn increment(&mut self, symbol: &str) {
        self.add(symbol, 1);
    }

    /// Fold another table into this one.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (symbol, count) in other.counts {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
    }

    /// Get the count for a symbol.
    #[inline]
    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no symbol has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted sequence.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in ascending symbol order.
    pub fn sorted(&self) -> Vec<(&Symbol, u64)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(s, &c)| (s, c)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, u64)> {
        self.counts.iter().map(|(s, &c)| (s, c))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for symbol in iter {
            table.increment(symbol.as_ref());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_total() {
        let table: FrequencyTable = ["LEFT", "GRAB", "LEFT"].into_iter().collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("LEFT"), Some(2));
        assert_eq!(table.get("GRAB"), Some(1));
        assert_eq!(table.get("BACK"), None);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_zero_count_ignored() {
        let mut table = FrequencyTable::new();
        table.add("LEFT", 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_sorted_is_by_symbol() {
        let table: FrequencyTable = ["c", "a", "b", "a"].into_iter().collect();
        let sorted: Vec<_> = table.sorted().into_iter().map(|(s, c)| (s.as_str(), c)).collect();
        assert_eq!(sorted, vec![("a", 2), ("b", 1), ("c", 1)]);
    }

    #[test]
    fn test_merge() {
        let mut left: FrequencyTable = ["a", "b"].into_iter().collect();
        let right: FrequencyTable = ["b", "c", "c"].into_iter().collect();
        left.merge(right);

        assert_eq!(left.get("a"), Some(1));
        assert_eq!(left.get("b"), Some(2));
        assert_eq!(left.get("c"), Some(2));
        assert_eq!(left.total(), 5);
    }

    #[test]
    fn test_symbols_are_exact() {
        let table: FrequencyTable = ["left", "LEFT", "LEFT "].into_iter().collect();
        assert_eq!(table.len(), 3);
    }
}
