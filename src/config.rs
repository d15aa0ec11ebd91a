//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{DEFAULT_CAPACITY_PER_SHARD, DEFAULT_NUM_SHARDS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of independently locked cache shards
    pub num_shards: usize,
    /// Maximum number of entries per shard
    pub capacity_per_shard: usize,
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum key length in characters
    pub max_key_length: usize,
    /// Maximum value length in characters
    pub max_value_length: usize,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    ///
    /// # Environment Variables
    /// - `NUM_SHARDS` - Shard count (default: 64)
    /// - `CAPACITY_PER_SHARD` - Entries per shard (default: 4096)
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 7171)
    /// - `MAX_KEY_LENGTH` - Key length limit in characters (default: 256)
    /// - `MAX_VALUE_LENGTH` - Value length limit in characters (default: 256)
    /// - `MAX_BODY_BYTES` - Request body limit (default: 1048576)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            num_shards: env_or("NUM_SHARDS", defaults.num_shards),
            capacity_per_shard: env_or("CAPACITY_PER_SHARD", defaults.capacity_per_shard),
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            max_key_length: env_or("MAX_KEY_LENGTH", defaults.max_key_length),
            max_value_length: env_or("MAX_VALUE_LENGTH", defaults.max_value_length),
            max_body_bytes: env_or("MAX_BODY_BYTES", defaults.max_body_bytes),
        }
    }

    /// Hard upper bound on resident cache entries.
    pub fn total_capacity(&self) -> usize {
        self.num_shards * self.capacity_per_shard
    }

    /// Address string the server listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_shards: DEFAULT_NUM_SHARDS,
            capacity_per_shard: DEFAULT_CAPACITY_PER_SHARD,
            server_host: "0.0.0.0".to_string(),
            server_port: 7171,
            max_key_length: 256,
            max_value_length: 256,
            max_body_bytes: 1024 * 1024,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
