//! Symbol frequency counting.
//!
//! This module counts how often each command occurs in a sequence, with
//! support for parallel processing of long sequences.

use cmdcode_core::FrequencyTable;
use rayon::prelude::*;

/// Sequences are split into chunks of this many symbols for parallel counting.
const PARALLEL_CHUNK: usize = 4096;

/// Counter for symbol frequencies.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyCounter {
    /// Whether to count on the rayon pool
    parallel: bool,
    /// Shortest sequence worth counting in parallel
    parallel_threshold: usize,
}

impl FrequencyCounter {
    /// Create a sequential counter.
    pub fn new() -> Self {
        Self {
            parallel: false,
            parallel_threshold: usize::MAX,
        }
    }

    /// Create a counter that switches to parallel counting for sequences of
    /// at least `threshold` symbols.
    pub fn parallel(threshold: usize) -> Self {
        Self {
            parallel: true,
            parallel_threshold: threshold,
        }
    }

    /// Count a sequence, picking the parallel path for long inputs.
    pub fn count<S>(&self, symbols: &[S]) -> FrequencyTable
    where
        S: AsRef<str> + Sync,
    {
        if self.parallel && symbols.len() >= self.parallel_threshold {
            Self::count_parallel(symbols)
        } else {
            Self::count_sequential(symbols)
        }
    }

    /// Count all symbols sequentially.
    pub fn count_sequential<S: AsRef<str>>(symbols: &[S]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for symbol in symbols {
            table.increment(symbol.as_ref());
        }
        table
    }

    /// Count all symbols in parallel.
    ///
    /// Each chunk is counted into its own table and the partial tables are
    /// merged, so the result equals [`FrequencyCounter::count_sequential`].
    pub fn count_parallel<S>(symbols: &[S]) -> FrequencyTable
    where
        S: AsRef<str> + Sync,
    {
        symbols
            .par_chunks(PARALLEL_CHUNK)
            .map(Self::count_sequential)
            .reduce(FrequencyTable::new, |mut acc, partial| {
                acc.merge(partial);
                acc
            })
    }

    /// Whether this counter may use the rayon pool.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_sequential() {
        let commands = ["LEFT", "GRAB", "LEFT", "BACK", "LEFT", "BACK", "LEFT"];
        let table = FrequencyCounter::count_sequential(&commands);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("LEFT"), Some(4));
        assert_eq!(table.get("BACK"), Some(2));
        assert_eq!(table.get("GRAB"), Some(1));
        assert_eq!(table.total(), commands.len() as u64);
    }

    #[test]
    fn test_empty_input() {
        let commands: [&str; 0] = [];
        assert!(FrequencyCounter::new().count(&commands).is_empty());
        assert!(FrequencyCounter::count_parallel(&commands).is_empty());
    }

    #[test]
    fn test_order_does_not_change_counts() {
        let forward = ["a", "b", "a", "c"];
        let backward = ["c", "a", "b", "a"];
        assert_eq!(
            FrequencyCounter::count_sequential(&forward),
            FrequencyCounter::count_sequential(&backward)
        );
    }

    #[test]
    fn test_count_parallel_matches_sequential() {
        // Long enough to span several chunks
        let commands: Vec<String> = (0..20_000).map(|i| format!("CMD{}", i % 37)).collect();

        let sequential = FrequencyCounter::count_sequential(&commands);
        let parallel = FrequencyCounter::count_parallel(&commands);

        assert_eq!(sequential, parallel);
        assert_eq!(parallel.total(), 20_000);
        assert_eq!(parallel.len(), 37);
    }

    #[test]
    fn test_threshold_selects_path() {
        let commands = vec!["x"; 10];
        let counter = FrequencyCounter::parallel(5);
        assert!(counter.is_parallel());
        assert_eq!(counter.count(&commands).get("x"), Some(10));
        assert!(!FrequencyCounter::new().is_parallel());
    }
}
