//! Result cache owned by a memoized wrapper

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cached results keyed by canonical argument-list keys.
///
/// Entries are never evicted on their own; callers may inspect, seed,
/// remove or clear them, and the wrapper honours whatever is stored.
#[derive(Debug)]
pub struct MemoCache<R> {
    /// Cache storage
    entries: DashMap<String, R>,
    /// Lookups answered from the cache
    hits: AtomicU64,
    /// Lookups that had to invoke the wrapped function
    misses: AtomicU64,
}

impl<R> MemoCache<R> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Store a result under `key`, returning the value it replaced
    pub fn insert(&self, key: impl Into<String>, value: R) -> Option<R> {
        self.entries.insert(key.into(), value)
    }

    /// Remove a single entry
    pub fn remove(&self, key: &str) -> Option<R> {
        self.entries.remove(key).map(|(_, value)| value)
    }

    /// Check whether a key is cached, whatever its value
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get all keys
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Get entry count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}

impl<R: Clone> MemoCache<R> {
    /// Get a cached result without touching the statistics
    pub fn get(&self, key: &str) -> Option<R> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Lookup on behalf of a call: counts a hit or a miss.
    ///
    /// The map guard is released before returning so the caller may invoke
    /// the wrapped function, which could touch this cache again.
    pub(crate) fn lookup(&self, key: &str) -> Option<R> {
        let found = self.get(key);
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }
}

impl<R> Default for MemoCache<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the cache
    pub hits: u64,
    /// Calls that invoked the wrapped function
    pub misses: u64,
    /// Number of cached entries
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of calls answered from the cache, 0.0 when nothing was called
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
