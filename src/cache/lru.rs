//! LRU Shard Module
//!
//! Bounded, single-threaded LRU container backing each cache shard.
//!
//! Entries live in an arena of slots linked into a doubly linked list by
//! index. The key index maps a key to its slot and never owns the entry.
//!
//! - Head = Most recently used
//! - Tail = Least recently used

use std::collections::HashMap;

use crate::cache::{Entry, DEFAULT_CAPACITY_PER_SHARD};

/// Null link in the slot list.
const NIL: usize = usize::MAX;

// == Slot ==
#[derive(Debug)]
struct Slot {
    entry: Entry,
    prev: usize,
    next: usize,
}

// == LRU Shard ==
/// LRU-ordered key-value container with a fixed capacity.
///
/// All operations are O(1) amortized. The arena never grows past
/// `capacity` slots: once full, the tail slot is recycled for the
/// incoming entry.
#[derive(Debug)]
pub struct LruShard {
    /// Maximum number of resident entries
    capacity: usize,
    /// Key to slot lookup
    index: HashMap<String, usize>,
    /// Slot arena, owns every entry
    slots: Vec<Slot>,
    /// Most recently used slot
    head: usize,
    /// Least recently used slot
    tail: usize,
}

impl LruShard {
    // == Constructor ==
    /// Creates an empty shard holding at most `capacity` entries.
    ///
    /// A capacity of zero falls back to [`DEFAULT_CAPACITY_PER_SHARD`].
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY_PER_SHARD
        } else {
            capacity
        };

        Self {
            capacity,
            index: HashMap::with_capacity(capacity),
            slots: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    // == Get ==
    /// Looks up `key` and marks it as most recently used on a hit.
    ///
    /// A miss leaves the shard untouched.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        let idx = *self.index.get(key)?;
        self.move_to_front(idx);
        Some(self.slots[idx].entry.value.as_str())
    }

    // == Put ==
    /// Inserts or overwrites `key`, making it the most recently used entry.
    ///
    /// Overwrites never evict. Inserting a new key into a full shard evicts
    /// exactly one entry, the least recently used, and returns it.
    pub fn put(&mut self, key: String, value: String) -> Option<Entry> {
        let entry = Entry::new(key.clone(), value);
        self.put_entry(key, entry)
    }

    /// Same as [`put`](Self::put), with both owned copies of the key built
    /// by the caller: `key` goes into the index, `entry` into the arena.
    ///
    /// Performs no allocation beyond growing the index or the arena.
    pub fn put_entry(&mut self, key: String, entry: Entry) -> Option<Entry> {
        if let Some(&idx) = self.index.get(key.as_str()) {
            self.slots[idx].entry.replace_value(entry.value);
            self.move_to_front(idx);
            return None;
        }

        if self.index.len() >= self.capacity {
            let idx = self.tail;
            self.unlink(idx);
            let evicted = std::mem::replace(&mut self.slots[idx].entry, entry);
            self.index.remove(evicted.key.as_str());
            self.push_front(idx);
            self.index.insert(key, idx);
            return Some(evicted);
        }

        let idx = self.slots.len();
        self.slots.push(Slot {
            entry,
            prev: NIL,
            next: NIL,
        });
        self.push_front(idx);
        self.index.insert(key, idx);
        None
    }

    // == Length ==
    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == List Operations ==

    fn move_to_front(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.push_front(idx);
    }

    fn push_front(&mut self, idx: usize) {
        self.slots[idx].prev = NIL;
        self.slots[idx].next = self.head;
        if self.head != NIL {
            self.slots[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);

        if prev != NIL {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.slots[idx].prev = NIL;
        self.slots[idx].next = NIL;
    }

    // == Test Helpers ==

    /// Keys from most to least recently used.
    #[cfg(test)]
    pub(crate) fn keys_mru(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.len());
        let mut cursor = self.head;
        while cursor != NIL {
            keys.push(self.slots[cursor].entry.key.clone());
            cursor = self.slots[cursor].next;
        }
        keys
    }

    /// Verifies that the key index and the slot list describe the same set
    /// of entries and that the capacity bound holds.
    #[cfg(test)]
    pub(crate) fn check_consistency(&self) -> Result<(), String> {
        if self.index.len() > self.capacity {
            return Err(format!(
                "{} entries exceed capacity {}",
                self.index.len(),
                self.capacity
            ));
        }
        if self.slots.len() != self.index.len() {
            return Err(format!(
                "{} slots but {} indexed keys",
                self.slots.len(),
                self.index.len()
            ));
        }

        let mut seen = 0;
        let mut prev = NIL;
        let mut cursor = self.head;
        while cursor != NIL {
            let slot = &self.slots[cursor];
            if slot.prev != prev {
                return Err(format!("broken back link at slot {}", cursor));
            }
            match self.index.get(slot.entry.key.as_str()) {
                Some(&idx) if idx == cursor => {}
                other => {
                    return Err(format!(
                        "key {:?} at slot {} indexed as {:?}",
                        slot.entry.key, cursor, other
                    ))
                }
            }
            seen += 1;
            if seen > self.slots.len() {
                return Err("cycle in slot list".to_string());
            }
            prev = cursor;
            cursor = slot.next;
        }

        if prev != self.tail {
            return Err("tail does not terminate the list".to_string());
        }
        if seen != self.index.len() {
            return Err(format!(
                "{} linked slots but {} indexed keys",
                seen,
                self.index.len()
            ));
        }
        Ok(())
    }
}
