//! Shard Router Module
//!
//! Maps keys to shard indices with a 32-bit FNV-1a hash.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

// == FNV-1a ==
/// Computes the 32-bit FNV-1a hash of `bytes`.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

// == Shard Router ==
/// Deterministic key-to-shard assignment for a fixed shard count.
///
/// Holds no mutable state and can be shared freely across threads. When the
/// shard count is a power of two the modulo is replaced by a bitmask, which
/// yields the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardRouter {
    num_shards: usize,
    mask: Option<usize>,
}

impl ShardRouter {
    // == Constructor ==
    /// Creates a router over `num_shards` shards (at least one).
    pub fn new(num_shards: usize) -> Self {
        let num_shards = num_shards.max(1);
        let mask = num_shards.is_power_of_two().then(|| num_shards - 1);
        Self { num_shards, mask }
    }

    // == Route ==
    /// Returns the shard index owning `key`.
    #[inline]
    pub fn route(&self, key: &str) -> usize {
        let hash = fnv1a_32(key.as_bytes()) as usize;
        match self.mask {
            Some(mask) => hash & mask,
            None => hash % self.num_shards,
        }
    }

    // == Shard Count ==
    pub fn num_shards(&self) -> usize {
        self.num_shards
    }
}
