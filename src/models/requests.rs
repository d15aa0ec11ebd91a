//! Request DTOs for the cache server API
//!
//! Defines incoming request shapes and the validation applied to them
//! before anything reaches the cache.

use serde::{Deserialize, Deserializer};

use crate::config::Config;
use crate::error::{ApiError, Result};

/// Size limits applied to incoming requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    /// Maximum key length in characters
    pub max_key_length: usize,
    /// Maximum value length in characters
    pub max_value_length: usize,
    /// Maximum request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RequestLimits {
    fn from(config: &Config) -> Self {
        Self {
            max_key_length: config.max_key_length,
            max_value_length: config.max_value_length,
            max_body_bytes: config.max_body_bytes,
        }
    }
}

/// Request body for the PUT operation (PUT /put)
///
/// Missing and `null` fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PutRequest {
    /// The cache key, trimmed before use
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key: String,
    /// The value to store, may be empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

impl PutRequest {
    /// Decodes the first JSON value of `body`, ignoring anything after it.
    ///
    /// A top-level `null` yields an empty request. An empty body is an error.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let mut stream =
            serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();
        match stream.next() {
            Some(req) => req.map(Option::unwrap_or_default),
            None => Err(serde::de::Error::custom("empty request body")),
        }
    }

    /// Validates the request, returning the trimmed key to store under.
    pub fn validate(&self, limits: &RequestLimits) -> Result<&str> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(ApiError::InvalidRequest("Key cannot be empty.".to_string()));
        }
        check_key_length(key, limits)?;

        // Lengths count characters, not bytes
        if self.value.chars().count() > limits.max_value_length {
            return Err(ApiError::InvalidRequest(format!(
                "Value exceeds maximum length ({} characters).",
                limits.max_value_length
            )));
        }
        Ok(key)
    }
}

/// Query parameters for the GET operation (GET /get?key=...)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetParams {
    #[serde(default)]
    pub key: String,
}

impl GetParams {
    /// Builds the params from decoded query pairs.
    ///
    /// When `key` is repeated the first occurrence wins; other names are
    /// ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let key = pairs
            .into_iter()
            .find_map(|(name, value)| (name == "key").then_some(value))
            .unwrap_or_default();
        Self { key }
    }

    /// Validates the query, returning the trimmed key to look up.
    pub fn validate(&self, limits: &RequestLimits) -> Result<&str> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(ApiError::InvalidRequest(
                "Missing 'key' query parameter.".to_string(),
            ));
        }
        check_key_length(key, limits)?;
        Ok(key)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn check_key_length(key: &str, limits: &RequestLimits) -> Result<()> {
    if key.chars().count() > limits.max_key_length {
        return Err(ApiError::InvalidRequest(format!(
            "Key exceeds maximum length ({} characters).",
            limits.max_key_length
        )));
    }
    Ok(())
}
