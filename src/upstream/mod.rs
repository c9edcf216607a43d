//! Upstream similarity service.
//!
//! # Data Flow
//! ```text
//! TargetWord
//!     → client.rs (POST {word1, word2} as JSON, follow redirects)
//!     → 2xx: JSON body returned verbatim
//!     → non-2xx: UpstreamError::Status
//!     → send/decode failure: UpstreamError::Transport
//! ```

pub mod client;

pub use client::{ClientBuildError, SimilarityClient, SimilarityRequest, UpstreamError};
