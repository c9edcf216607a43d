//! Outbound call to the similarity service.

use std::time::Duration;

use reqwest::{redirect, Client, Url};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Errors building the upstream client at startup.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors from a single comparison call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered, but with a non-success status.
    #[error("Upstream error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// Upstream unreachable, timed out, or answered with something that is
    /// not JSON.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl UpstreamError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Status { .. } => "status",
            UpstreamError::Transport(_) => "transport",
        }
    }
}

/// Body POSTed upstream.
#[derive(Debug, Serialize)]
pub struct SimilarityRequest<'a> {
    pub word1: &'a str,
    pub word2: &'a str,
}

/// Client for the upstream similarity endpoint.
///
/// Cheap to share: `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct SimilarityClient {
    client: Client,
    url: Url,
    reference_word: String,
}

impl SimilarityClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientBuildError> {
        let url = Url::parse(&config.url)?;

        let mut builder = Client::builder().redirect(redirect::Policy::limited(config.max_redirects));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            url,
            reference_word: config.reference_word.clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn reference_word(&self) -> &str {
        &self.reference_word
    }

    /// Compare `word` against the reference word.
    ///
    /// Returns the upstream JSON untouched. Never retries.
    pub async fn compare(&self, word: &str) -> Result<Value, UpstreamError> {
        let payload = SimilarityRequest {
            word1: &self.reference_word,
            word2: word,
        };

        tracing::debug!(url = %self.url, word1 = %payload.word1, word2 = %payload.word2, "Calling upstream");

        let response = self
            .client
            .post(self.url.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
