//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section has defaults, so an empty file (or no file) yields a
//! working configuration.

use serde::{Deserialize, Serialize};

/// Word every user-supplied word is compared against.
pub const DEFAULT_REFERENCE_WORD: &str = "centrale";

/// Upstream similarity endpoint.
pub const DEFAULT_UPSTREAM_URL: &str = "https://word2vec.nicolasfley.fr/similarity";

/// Root configuration for the similarity proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream similarity service.
    pub upstream: UpstreamConfig,

    /// Inbound request limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Upstream similarity service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Full URL the word pair is POSTed to.
    pub url: String,

    /// Sent as `word1` on every comparison.
    pub reference_word: String,

    /// Maximum redirect hops followed before giving up.
    pub max_redirects: usize,

    /// Total request timeout in seconds. Unset means client defaults.
    pub timeout_secs: Option<u64>,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
            reference_word: DEFAULT_REFERENCE_WORD.to_string(),
            max_redirects: 10,
            timeout_secs: None,
            system_proxy: true,
        }
    }
}

/// Inbound request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest JSON body read from POST/PUT requests. Bigger bodies are
    /// treated as absent input.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 64 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
