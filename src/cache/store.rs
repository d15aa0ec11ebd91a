//! Cache Store Module
//!
//! Sharded cache engine: routes every operation to exactly one LRU shard.

use tracing::{info, trace};

use crate::cache::{Shard, ShardRouter, DEFAULT_CAPACITY_PER_SHARD, DEFAULT_NUM_SHARDS};

// == Sharded Cache ==
/// Fixed set of independently locked LRU shards.
///
/// The shard list is built once and never resized, so the cache itself needs
/// no lock and can be shared by reference (or `Arc`) across all callers.
/// Each call touches one shard and holds at most that shard's lock.
#[derive(Debug)]
pub struct ShardedCache {
    /// Immutable shard list
    shards: Box<[Shard]>,
    /// Key to shard assignment
    router: ShardRouter,
    /// Capacity of every shard
    capacity_per_shard: usize,
}

impl ShardedCache {
    // == Constructor ==
    /// Creates a cache of `num_shards` shards holding `capacity_per_shard`
    /// entries each.
    ///
    /// Zero for either argument falls back to [`DEFAULT_NUM_SHARDS`] or
    /// [`DEFAULT_CAPACITY_PER_SHARD`].
    pub fn new(num_shards: usize, capacity_per_shard: usize) -> Self {
        let num_shards = if num_shards == 0 {
            DEFAULT_NUM_SHARDS
        } else {
            num_shards
        };
        let capacity_per_shard = if capacity_per_shard == 0 {
            DEFAULT_CAPACITY_PER_SHARD
        } else {
            capacity_per_shard
        };

        let shards: Box<[Shard]> = (0..num_shards)
            .map(|_| Shard::new(capacity_per_shard))
            .collect();

        info!(
            "Initialized sharded cache with {} shards, {} capacity per shard (total capacity: {})",
            num_shards,
            capacity_per_shard,
            num_shards * capacity_per_shard
        );

        Self {
            shards,
            router: ShardRouter::new(num_shards),
            capacity_per_shard,
        }
    }

    // == Get ==
    /// Retrieves the value for `key` from its shard.
    ///
    /// A hit marks the key as most recently used within that shard.
    pub fn get(&self, key: &str) -> Option<String> {
        self.shard_for(key).get(key)
    }

    // == Put ==
    /// Inserts or overwrites `key` in its shard.
    ///
    /// If the shard is full and `key` is new, the shard's least recently
    /// used entry is evicted.
    pub fn put(&self, key: &str, value: &str) {
        let index = self.shard_index(key);
        if let Some(evicted) = self.shards[index].put(key, value) {
            trace!(shard = index, key = %evicted.key, "Evicted least recently used entry");
        }
    }

    // == Shard Index ==
    /// Returns the index of the shard that owns `key`.
    pub fn shard_index(&self, key: &str) -> usize {
        self.router.route(key)
    }

    // == Shard Length ==
    /// Returns the number of entries in shard `index`, or None if out of range.
    pub fn shard_len(&self, index: usize) -> Option<usize> {
        self.shards.get(index).map(Shard::len)
    }

    // == Length ==
    /// Returns the number of resident entries across all shards.
    ///
    /// Shards are visited one at a time, so under concurrent writes the sum
    /// is a snapshot rather than an atomic count.
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(Shard::is_empty)
    }

    // == Layout ==
    pub fn num_shards(&self) -> usize {
        self.shards.len()
    }

    pub fn capacity_per_shard(&self) -> usize {
        self.capacity_per_shard
    }

    /// Hard upper bound on resident entries.
    pub fn total_capacity(&self) -> usize {
        self.num_shards() * self.capacity_per_shard
    }

    fn shard_for(&self, key: &str) -> &Shard {
        &self.shards[self.shard_index(key)]
    }

    #[cfg(test)]
    pub(crate) fn shards(&self) -> &[Shard] {
        &self.shards
    }
}

impl Default for ShardedCache {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_SHARDS, DEFAULT_CAPACITY_PER_SHARD)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    /// Collects `count` distinct keys that all route to `shard`.
    fn keys_for_shard(cache: &ShardedCache, shard: usize, count: usize) -> Vec<String> {
        (0..)
            .map(|i| format!("key{}", i))
            .filter(|k| cache.shard_index(k) == shard)
            .take(count)
            .collect()
    }

    #[test]
    fn test_store_new() {
        let cache = ShardedCache::new(8, 16);
        assert_eq!(cache.num_shards(), 8);
        assert_eq!(cache.capacity_per_shard(), 16);
        assert_eq!(cache.total_capacity(), 128);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_store_zero_arguments_use_defaults() {
        let cache = ShardedCache::new(0, 0);
        assert_eq!(cache.num_shards(), DEFAULT_NUM_SHARDS);
        assert_eq!(cache.capacity_per_shard(), DEFAULT_CAPACITY_PER_SHARD);
    }

    #[test]
    fn test_store_default() {
        let cache = ShardedCache::default();
        assert_eq!(cache.total_capacity(), 64 * 4096);
    }

    #[test]
    fn test_store_put_and_get() {
        let cache = ShardedCache::new(4, 10);

        cache.put("key1", "value1");

        assert_eq!(cache.get("key1"), Some("value1".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let cache = ShardedCache::new(4, 10);
        assert_eq!(cache.get("nonexistent"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_store_overwrite() {
        let cache = ShardedCache::new(4, 10);

        cache.put("key1", "value1");
        cache.put("key1", "value2");

        assert_eq!(cache.get("key1"), Some("value2".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_entry_lands_in_routed_shard() {
        let cache = ShardedCache::new(8, 10);

        cache.put("routed", "v");

        let index = cache.shard_index("routed");
        assert_eq!(cache.shard_len(index), Some(1));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.shard_len(8), None);
    }

    #[test]
    fn test_store_lru_eviction_within_shard() {
        let cache = ShardedCache::new(4, 3);
        let keys = keys_for_shard(&cache, 2, 4);

        for key in &keys {
            cache.put(key, "v");
        }

        assert_eq!(cache.shard_len(2), Some(3));
        assert_eq!(cache.get(&keys[0]), None);
        for key in &keys[1..] {
            assert!(cache.get(key).is_some());
        }
    }

    #[test]
    fn test_store_lru_touch_on_get() {
        let cache = ShardedCache::new(4, 3);
        let keys = keys_for_shard(&cache, 1, 4);

        cache.put(&keys[0], "v0");
        cache.put(&keys[1], "v1");
        cache.put(&keys[2], "v2");

        // Access keys[0] so keys[1] becomes the eviction candidate
        assert_eq!(cache.get(&keys[0]), Some("v0".to_string()));

        cache.put(&keys[3], "v3");

        assert_eq!(cache.get(&keys[0]), Some("v0".to_string()));
        assert_eq!(cache.get(&keys[1]), None);
    }

    #[test]
    fn test_store_eviction_is_per_shard() {
        let cache = ShardedCache::new(2, 2);
        let shard0 = keys_for_shard(&cache, 0, 3);
        let shard1 = keys_for_shard(&cache, 1, 2);

        for key in &shard1 {
            cache.put(key, "kept");
        }
        for key in &shard0 {
            cache.put(key, "churn");
        }

        // Filling shard 0 past capacity never touches shard 1
        for key in &shard1 {
            assert_eq!(cache.get(key), Some("kept".to_string()));
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_store_scenario_single_shard() {
        let cache = ShardedCache::new(1, 2);

        cache.put("a", "1");
        cache.put("b", "2");
        assert_eq!(cache.get("a"), Some("1".to_string()));
        cache.put("c", "3");

        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some("1".to_string()));
        assert_eq!(cache.get("c"), Some("3".to_string()));
    }

    #[test]
    fn test_store_capacity_bound() {
        let cache = ShardedCache::new(4, 5);

        for i in 0..500 {
            cache.put(&format!("key{}", i), "v");
        }

        assert!(cache.len() <= cache.total_capacity());
        for index in 0..cache.num_shards() {
            assert!(cache.shard_len(index).unwrap() <= 5);
        }
        for shard in cache.shards() {
            shard
                .with_locked(|lru| lru.check_consistency())
                .expect("shard should stay consistent");
        }
    }
}
