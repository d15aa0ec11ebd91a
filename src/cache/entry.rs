//! Cache Entry Module
//!
//! Defines the key-value pair stored inside a shard.

// == Entry ==
/// A single key-value pair owned by exactly one shard.
///
/// Overwriting a key replaces `value` in place; the entry itself is only
/// dropped on eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The lookup key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl Entry {
    // == Constructor ==
    /// Creates a new entry from anything convertible into owned strings.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    // == Replace Value ==
    /// Swaps in a new value, returning the previous one.
    pub fn replace_value(&mut self, value: String) -> String {
        std::mem::replace(&mut self.value, value)
    }
}
