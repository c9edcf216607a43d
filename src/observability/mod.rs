//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handler and server produce:
//!     → logging.rs (tracing subscriber, structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
