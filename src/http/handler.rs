//! The similarity request handler.
//!
//! ```text
//! OPTIONS → preflight
//! else    → extract word → validate → upstream → 200 | 400 | 502 | 500
//! ```

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::http::request::{extract_target_word, TargetWord};
use crate::http::response::{preflight_response, HandlerError};
use crate::http::server::AppState;
use crate::observability::metrics;

/// Entry point for every path and method.
pub async fn similarity_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();

    if method == Method::OPTIONS {
        metrics::record_request(method.as_str(), StatusCode::OK.as_u16(), start_time);
        return preflight_response();
    }

    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = match compare(&state, request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            match &err {
                HandlerError::MissingInput => {
                    tracing::debug!(request_id = %request_id, method = %method, "Missing user input");
                }
                HandlerError::Upstream(upstream) => {
                    tracing::error!(request_id = %request_id, error = %upstream, "Upstream call failed");
                    metrics::record_upstream_error(upstream.kind());
                }
            }
            err.into_response()
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
    response
}

async fn compare(state: &AppState, request: Request<Body>) -> Result<Value, HandlerError> {
    let word: TargetWord = extract_target_word(request, state.max_body_bytes).await?;
    tracing::debug!(word = %word, "Comparing word");
    Ok(state.client.compare(word.as_str()).await?)
}
