//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies. Every body
//! carries a `status` of either `"OK"` or `"ERROR"`.

use serde::Serialize;

const STATUS_OK: &str = "OK";
const STATUS_ERROR: &str = "ERROR";

/// Response body for a cache hit (GET /get)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub status: String,
    /// The requested key, trimmed
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for a successful PUT (PUT /put)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    pub status: String,
    pub message: String,
}

impl PutResponse {
    pub fn success() -> Self {
        Self {
            status: STATUS_OK.to_string(),
            message: "Key inserted/updated successfully.".to_string(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    /// Human-readable reason
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }
}
