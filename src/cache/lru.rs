//! A bounded, thread-safe least-recently-used map.
//!
//! Entries live in an `IndexMap` ordered from least to most recently used.
//! A single mutex guards the map, so eviction bookkeeping can never be torn
//! by concurrent callers, and `get_or_insert_with` runs its constructor at
//! most once per key.

use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;

use super::stats::{CacheStats, CacheStatsSnapshot};

/// Bounded LRU cache. Values are cloned out on lookup.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    entries: Mutex<IndexMap<K, V>>,
    stats: CacheStats,
}

impl<K: Hash + Eq, V: Clone> LruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero stores nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(IndexMap::with_capacity(capacity.min(1024))),
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }

    /// Returns the cached value and marks it most recently used.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.lock();
        match Self::touch(&mut entries, key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Inserts or overwrites, evicting the least recently used entries while
    /// over capacity.
    pub fn put(&self, key: K, value: V) {
        let mut entries = self.lock();
        entries.shift_remove(&key);
        entries.insert(key, value);
        self.evict_overflow(&mut entries);
    }

    /// Returns the cached value, or builds, stores and returns a new one.
    ///
    /// The lock is held while `create` runs, so concurrent callers for the
    /// same key observe exactly one construction.
    pub fn get_or_insert_with<F>(&self, key: K, create: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        let mut entries = self.lock();
        if let Some(value) = Self::touch(&mut entries, &key) {
            self.stats.record_hit();
            return value;
        }
        self.stats.record_miss();
        let value = create(&key);
        entries.insert(key, value.clone());
        self.evict_overflow(&mut entries);
        value
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.lock().contains_key(key)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<K, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves `key` to the most recently used end.
    fn touch(entries: &mut IndexMap<K, V>, key: &K) -> Option<V> {
        let index = entries.get_index_of(key)?;
        let last = entries.len() - 1;
        entries.move_index(index, last);
        entries.get_index(last).map(|(_, value)| value.clone())
    }

    fn evict_overflow(&self, entries: &mut IndexMap<K, V>) {
        while entries.len() > self.capacity {
            if entries.shift_remove_index(0).is_none() {
                break;
            }
            self.stats.record_eviction();
            tracing::trace!(capacity = self.capacity, "evicted least recently used entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_put() {
        let cache = LruCache::new(4);
        assert_eq!(cache.get(&"a"), None);
        cache.put("a", 1);
        assert_eq!(cache.get(&"a"), Some(1));
        cache.put("a", 2);
        assert_eq!(cache.get(&"a"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let cache = LruCache::new(2);
        cache.put("p1", "a1");
        cache.put("p2", "a2");
        assert_eq!(cache.get(&"p1"), Some("a1"));
        cache.put("p3", "a3");
        assert_eq!(cache.get(&"p2"), None);
        assert_eq!(cache.get(&"p1"), Some("a1"));
        assert_eq!(cache.get(&"p3"), Some("a3"));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_overwrite_refreshes_recency() {
        let cache = LruCache::new(2);
        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(1, "c");
        cache.put(3, "d");
        assert!(cache.contains_key(&1));
        assert!(!cache.contains_key(&2));
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = LruCache::new(0);
        cache.put(1, 1);
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_insert_with(1, |_| 5), 5);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_get_or_insert_with_constructs_once() {
        let cache = LruCache::new(2);
        let mut calls = 0;
        let first = cache.get_or_insert_with("k", |_| {
            calls += 1;
            10
        });
        let second = cache.get_or_insert_with("k", |_| {
            calls += 1;
            20
        });
        assert_eq!((first, second, calls), (10, 10, 1));
    }

    #[test]
    fn test_misses_are_not_stored() {
        let cache: LruCache<&str, i32> = LruCache::new(2);
        assert_eq!(cache.get(&"missing"), None);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 1);
    }
}
