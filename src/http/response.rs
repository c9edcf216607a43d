//! Response shaping.
//!
//! # Responsibilities
//! - Cross-origin header set applied to every response
//! - Preflight response
//! - Map handler errors to status codes and JSON error payloads

use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, VARY,
        },
        HeaderName, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upstream::UpstreamError;

pub const PREFLIGHT_BODY: &str = "Preflight OK!";

pub const MISSING_INPUT_MESSAGE: &str =
    "Missing user input. Provide ?value=... or JSON { value: \"...\" }.";

pub const FETCH_FAILED_MESSAGE: &str = "Fetch failed";

/// Headers attached to every response, preflight or not.
pub const CORS_HEADERS: [(HeaderName, &str); 4] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "content-type"),
    (ACCESS_CONTROL_ALLOW_METHODS, "GET,POST,OPTIONS"),
    (VARY, "Origin"),
];

/// `CORS_HEADERS` as typed header values.
pub fn cors_headers() -> impl Iterator<Item = (HeaderName, HeaderValue)> {
    CORS_HEADERS
        .into_iter()
        .map(|(name, value)| (name, HeaderValue::from_static(value)))
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Everything that can end a request with an error status.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// No usable word in the query string or body.
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl HandlerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::MissingInput => StatusCode::BAD_REQUEST,
            HandlerError::Upstream(UpstreamError::Status { .. }) => StatusCode::BAD_GATEWAY,
            HandlerError::Upstream(UpstreamError::Transport(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        match self {
            HandlerError::Upstream(UpstreamError::Transport(e)) => ErrorPayload {
                error: FETCH_FAILED_MESSAGE.to_string(),
                details: Some(e.to_string()),
            },
            other => ErrorPayload {
                error: other.to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.payload())).into_response()
    }
}

/// 200 "Preflight OK!". CORS headers come from the router layer.
pub fn preflight_response() -> Response {
    (StatusCode::OK, PREFLIGHT_BODY).into_response()
}
