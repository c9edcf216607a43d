//! Word-similarity proxy library.
//!
//! One HTTP endpoint: take a word from the query string or a JSON body,
//! compare it against a fixed reference word through an upstream
//! similarity API, relay the result with permissive CORS headers.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::SimilarityConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
