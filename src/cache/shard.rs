//! Shard Module
//!
//! Thread-safe wrapper around a single [`LruShard`].

use parking_lot::Mutex;

use crate::cache::{Entry, LruShard};

// == Shard ==
/// One independently locked partition of the cache.
///
/// The mutex guards the key index and the recency list jointly. Every
/// operation takes the lock exactly once and does no I/O while holding it.
#[derive(Debug)]
pub struct Shard {
    inner: Mutex<LruShard>,
    capacity: usize,
}

impl Shard {
    // == Constructor ==
    /// Creates an empty shard bounded by `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        let lru = LruShard::new(capacity);
        Self {
            capacity: lru.capacity(),
            inner: Mutex::new(lru),
        }
    }

    // == Get ==
    /// Returns a copy of the value for `key`, refreshing its recency on a hit.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).map(str::to_owned)
    }

    // == Put ==
    /// Inserts or overwrites `key`.
    ///
    /// Both owned copies of the key and the value are allocated before the
    /// lock is taken. Returns the entry evicted to make room, if any; it is
    /// dropped by the caller, after the lock has been released.
    pub fn put(&self, key: &str, value: &str) -> Option<Entry> {
        let entry = Entry::new(key, value);
        let key = key.to_owned();
        self.inner.lock().put_entry(key, entry)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    // == Capacity ==
    /// Fixed at construction, read without locking.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Runs `f` against the locked container.
    #[cfg(test)]
    pub(crate) fn with_locked<R>(&self, f: impl FnOnce(&LruShard) -> R) -> R {
        let guard = self.inner.lock();
        f(&guard)
    }
}
