//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, CORS headers)
//!     → handler.rs (preflight short-circuit, orchestration)
//!     → request.rs (query/body extraction, TargetWord validation)
//!     → upstream::SimilarityClient
//!     → response.rs (status mapping, JSON error payloads)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use handler::similarity_handler;
pub use request::TargetWord;
pub use response::{ErrorPayload, HandlerError};
pub use server::{AppState, HttpServer};
