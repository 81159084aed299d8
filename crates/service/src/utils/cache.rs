//! Code table cache keyed by command log id.
//!
//! Stored codes never change once written, so a cached table stays valid
//! until its log is evicted from the store.

use ahash::AHashMap;
use cmdcode_core::{CodeTable, Result};
use std::collections::VecDeque;

/// LRU cache of generated code tables.
///
/// When the cache exceeds capacity, the least recently used table is evicted.
pub struct CodeTableCache {
    /// Log id -> code table
    cache: AHashMap<u64, CodeTable>,
    /// Maximum number of tables in the cache
    capacity: usize,
    /// Least recently used at the front
    recency: VecDeque<u64>,
    hits: u64,
    misses: u64,
}

impl CodeTableCache {
    /// Create a new cache with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: AHashMap::with_capacity(capacity),
            capacity,
            recency: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a new cache with default capacity (1000).
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Get the cached table for `log_id` or compute it with `generate`.
    ///
    /// A failed computation is not cached.
    pub fn get_or_generate<F>(&mut self, log_id: u64, generate: F) -> Result<CodeTable>
    where
        F: FnOnce(u64) -> Result<CodeTable>,
    {
        if let Some(cached) = self.cache.get(&log_id).cloned() {
            self.hits += 1;
            self.touch(log_id);
            return Ok(cached);
        }

        self.misses += 1;
        let table = generate(log_id)?;
        self.insert(log_id, table.clone());
        Ok(table)
    }

    /// Get a cached table without computing anything.
    pub fn get(&mut self, log_id: u64) -> Option<CodeTable> {
        let table = self.cache.get(&log_id).cloned()?;
        self.touch(log_id);
        Some(table)
    }

    /// Drop the table for a log.
    pub fn remove(&mut self, log_id: u64) -> Option<CodeTable> {
        let removed = self.cache.remove(&log_id)?;
        self.recency.retain(|&id| id != log_id);
        Some(removed)
    }

    /// Insert a table, evicting the least recently used one if full.
    fn insert(&mut self, log_id: u64, table: CodeTable) {
        if self.capacity == 0 {
            return;
        }

        if self.cache.contains_key(&log_id) {
            self.recency.retain(|&id| id != log_id);
        } else if self.cache.len() >= self.capacity {
            if let Some(oldest) = self.recency.pop_front() {
                self.cache.remove(&oldest);
            }
        }

        self.cache.insert(log_id, table);
        self.recency.push_back(log_id);
    }

    /// Mark a cached log as most recently used.
    fn touch(&mut self, log_id: u64) {
        if let Some(pos) = self.recency.iter().position(|&id| id == log_id) {
            self.recency.remove(pos);
        }
        self.recency.push_back(log_id);
    }

    /// Clear all entries from the cache.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.recency.clear();
    }

    /// Get the number of cached tables.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get the cache capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let lookups = self.hits + self.misses;
        CacheStats {
            entries: self.cache.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
            hit_rate: (lookups > 0).then(|| self.hits as f64 / lookups as f64),
        }
    }
}

impl Default for CodeTableCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Current number of entries
    pub entries: usize,
    /// Maximum capacity
    pub capacity: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to generate
    pub misses: u64,
    /// Cache hit rate (None before the first lookup)
    pub hit_rate: Option<f64>,
}
