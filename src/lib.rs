//! Shard Cache - A sharded in-memory key-value cache server
//!
//! Bounded capacity with per-shard LRU eviction, served over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use cache::ShardedCache;
pub use config::Config;
