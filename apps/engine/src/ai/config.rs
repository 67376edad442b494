//! Bot brain configuration handling.
//!
//! Typed interface over the JSON blob a deployment hands to the brain
//! factory, extracting standard fields while preserving brain-specific
//! custom fields.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for bot brains.
///
/// # Standard fields
///
/// - `seed`: optional RNG seed for deterministic behavior (tests, replays).
/// - `endpoint`: URL of the remote suggestion service, required by the
///   remote brain and ignored by the fallback brain.
///
/// Anything else stays available through [`BrainConfig::get_custom`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Brain-specific configuration preserved verbatim.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl BrainConfig {
    /// Create a `BrainConfig` from an optional JSON value, falling back to
    /// an empty config on malformed input.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            endpoint: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            endpoint: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            seed: None,
            endpoint: Some(endpoint.into()),
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self::empty()
    }
}
