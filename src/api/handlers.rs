//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. Handlers validate
//! input, then make a single synchronous call into the cache.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::cache::ShardedCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{GetParams, GetResponse, PutRequest, PutResponse, RequestLimits};

/// Application state shared across all handlers.
///
/// The cache does its own per-shard locking, so it is shared through a
/// plain `Arc` with no outer lock.
#[derive(Clone)]
pub struct AppState {
    /// Sharded cache engine
    pub cache: Arc<ShardedCache>,
    /// Validation limits for incoming requests
    pub limits: RequestLimits,
}

impl AppState {
    /// Creates a new AppState with the given cache and default limits.
    pub fn new(cache: ShardedCache) -> Self {
        Self::with_limits(cache, RequestLimits::default())
    }

    /// Creates a new AppState with explicit request limits.
    pub fn with_limits(cache: ShardedCache, limits: RequestLimits) -> Self {
        Self {
            cache: Arc::new(cache),
            limits,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = ShardedCache::new(config.num_shards, config.capacity_per_shard);
        Self::with_limits(cache, RequestLimits::from(config))
    }
}

/// Handler for PUT /put (POST is accepted too)
///
/// Stores a key-value pair in the cache.
pub async fn put_handler(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<PutResponse>> {
    let body = body.map_err(|rejection| {
        debug!("Rejected /put body: {}", rejection);
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::InvalidRequest(format!(
                "Request body exceeds limit ({}).",
                format_byte_limit(state.limits.max_body_bytes)
            ))
        } else {
            ApiError::InvalidRequest("Invalid JSON format.".to_string())
        }
    })?;

    let req = PutRequest::from_json(&body).map_err(|err| {
        debug!("Rejected /put JSON: {}", err);
        ApiError::InvalidRequest("Invalid JSON format.".to_string())
    })?;

    let key = req.validate(&state.limits)?;
    state.cache.put(key, &req.value);

    Ok(Json(PutResponse::success()))
}

/// Handler for GET /get?key=...
///
/// Retrieves a value from the cache by key.
pub async fn get_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<GetResponse>> {
    let Query(pairs) = query.map_err(|rejection| {
        debug!("Rejected /get query: {}", rejection);
        ApiError::InvalidRequest("Missing 'key' query parameter.".to_string())
    })?;

    let params = GetParams::from_pairs(pairs);
    let key = params.validate(&state.limits)?;
    let value = state.cache.get(key).ok_or(ApiError::NotFound)?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /health
pub async fn health_handler() -> &'static str {
    "OK\n"
}

/// Renders a byte count the way limit messages print it, e.g. `1MB`.
fn format_byte_limit(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * 1024;

    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}
