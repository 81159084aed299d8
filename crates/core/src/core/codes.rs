//! Generated code storage.
//!
//! A [`CodeTable`] maps every distinct symbol to a [`Code`], the string of
//! `0`/`1` digits along the path from the root of the merge tree to that
//! symbol's leaf. Tables are ordered by symbol, so two equal tables always
//! serialize to the same bytes.

use super::frequency::{FrequencyTable, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A bit code, stored as ASCII `'0'` and `'1'` digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    /// The empty code.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Parse a code from a string of binary digits.
    ///
    /// Returns None if the string contains anything other than `0` and `1`.
    pub fn parse(digits: &str) -> Option<Self> {
        digits
            .bytes()
            .all(|b| b == b'0' || b == b'1')
            .then(|| Self(digits.to_string()))
    }

    /// Append one bit; `false` is `0` (left), `true` is `1` (right).
    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.0.push(if bit { '1' } else { '0' });
    }

    /// This code extended by one bit.
    pub fn with_bit(&self, bit: bool) -> Self {
        let mut code = String::with_capacity(self.0.len() + 1);
        code.push_str(&self.0);
        let mut code = Self(code);
        code.push(bit);
        code
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the empty code.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The digits as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the bits from the root downwards.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    /// Check if `self` is a proper prefix of `other`.
    pub fn is_proper_prefix_of(&self, other: &Code) -> bool {
        self.len() < other.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// What code a lone distinct symbol receives.
///
/// With a single distinct symbol the tree is just one leaf, so the path
/// from the root is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleSymbolPolicy {
    /// The empty bit string
    #[default]
    Empty,
    /// A single `0` bit, so every code is non-empty
    Zero,
}

impl SingleSymbolPolicy {
    /// The code assigned to a root that is itself a leaf.
    pub fn root_leaf_code(self) -> Code {
        match self {
            SingleSymbolPolicy::Empty => Code::new(),
            SingleSymbolPolicy::Zero => Code("0".to_string()),
        }
    }
}

/// Mapping from symbol to code, ordered by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Set the code for a symbol, returning the previous one.
    pub fn insert(&mut self, symbol: Symbol, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    /// Get the code for a symbol.
    #[inline]
    pub fn get(&self, symbol: &str) -> Option<&Code> {
        self.codes.get(symbol)
    }

    /// Check if a symbol has a code.
    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.codes.contains_key(symbol)
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Code)> {
        self.codes.iter()
    }

    /// Check that no code is a proper prefix of another, and no two symbols
    /// share a code.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.codes.values().collect();
        // In sorted order, a prefix sorts directly before some code it
        // prefixes, so neighbours are enough.
        codes.sort_unstable();
        codes
            .windows(2)
            .all(|w| w[0] != w[1] && !w[0].is_proper_prefix_of(w[1]))
    }

    /// Sum of `count * code length` over all symbols in `frequencies`.
    ///
    /// Symbols without a code contribute nothing.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| count * code.len() as u64))
            .sum()
    }

    /// Get statistics about the table, weighted by `frequencies`.
    pub fn stats(&self, frequencies: &FrequencyTable) -> CodeStats {
        let mut min_len = usize::MAX;
        let mut max_len = 0;

        for code in self.codes.values() {
            min_len = min_len.min(code.len());
            max_len = max_len.max(code.len());
        }

        let total_occurrences = frequencies.total();
        let weighted_length = self.weighted_length(frequencies);

        CodeStats {
            symbols: self.len(),
            total_occurrences,
            min_len: if min_len == usize::MAX { 0 } else { min_len },
            max_len,
            weighted_length,
            average_bits: if total_occurrences == 0 {
                0.0
            } else {
                weighted_length as f64 / total_occurrences as f64
            },
        }
    }
}

impl FromIterator<(Symbol, Code)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, Code)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CodeTable {
    type Item = (Symbol, Code);
    type IntoIter = std::collections::btree_map::IntoIter<Symbol, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}

/// Statistics about a code table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CodeStats {
    /// Number of distinct symbols
    pub symbols: usize,
    /// Length of the counted sequence
    pub total_occurrences: u64,
    /// Shortest code length
    pub min_len: usize,
    /// Longest code length
    pub max_len: usize,
    /// Total bits needed to write the whole sequence
    pub weighted_length: u64,
    /// Bits per occurrence
    pub average_bits: f64,
}
