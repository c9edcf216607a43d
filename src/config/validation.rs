//! Configuration validation.
//!
//! Serde handles syntax; this module checks values that parse but make no
//! sense (unparseable addresses, non-HTTP upstream, blank reference word).
//! All errors are collected rather than stopping at the first one.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::SimilarityConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("upstream.url {0:?} is not a valid URL")]
    UpstreamUrl(String),

    #[error("upstream.url scheme {0:?} is not http or https")]
    UpstreamScheme(String),

    #[error("upstream.reference_word must not be blank")]
    BlankReferenceWord,

    #[error("limits.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("observability.metrics_address {0:?} is not a socket address")]
    MetricsAddress(String),
}

/// Validate a parsed configuration, returning every problem found.
pub fn validate_config(config: &SimilarityConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UpstreamScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::UpstreamUrl(config.upstream.url.clone())),
    }

    if config.upstream.reference_word.trim().is_empty() {
        errors.push(ValidationError::BlankReferenceWord);
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
