//! Cache Module
//!
//! Sharded in-memory key-value cache with per-shard LRU eviction.

mod entry;
mod lru;
mod router;
mod shard;
mod store;


// Re-export public types
pub use entry::Entry;
pub use lru::LruShard;
pub use router::{fnv1a_32, ShardRouter};
pub use shard::Shard;
pub use store::ShardedCache;

// == Public Constants ==
/// Shard count used when zero is configured
pub const DEFAULT_NUM_SHARDS: usize = 64;

/// Per-shard capacity used when zero is configured
pub const DEFAULT_CAPACITY_PER_SHARD: usize = 4096;
