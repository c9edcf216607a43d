//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{any, post},
    Router,
};
use similarity_proxy::config::SimilarityConfig;
use similarity_proxy::http::HttpServer;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// What the mock upstream saw on one call.
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub body: String,
    pub content_type: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    calls: Arc<Mutex<Vec<ReceivedCall>>>,
}

/// A running mock similarity service.
pub struct MockUpstream {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<ReceivedCall>>>,
}

#[allow(dead_code)]
impl MockUpstream {
    /// URL of the similarity route.
    pub fn url(&self) -> String {
        format!("http://{}/similarity", self.addr)
    }

    /// URL that answers 307 pointing at `url()`.
    pub fn redirecting_url(&self) -> String {
        format!("http://{}/moved", self.addr)
    }

    pub fn calls(&self) -> Vec<ReceivedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn record(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    state.calls.lock().unwrap().push(ReceivedCall {
        body: String::from_utf8_lossy(&body).into_owned(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
        .into_response()
}

/// Start a mock upstream on an ephemeral port that answers every
/// comparison with `status` and `body`.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        calls: calls.clone(),
    };

    let app = Router::new()
        .route("/similarity", post(record))
        .route("/moved", any(|| async { Redirect::temporary("/similarity") }))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, calls }
}

/// An address nothing listens on.
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/similarity", addr)
}

/// The fully layered proxy router pointed at `upstream_url`.
#[allow(dead_code)]
pub fn proxy_router(upstream_url: String) -> Router {
    let mut config = SimilarityConfig::default();
    config.upstream.url = upstream_url;
    config.upstream.system_proxy = false;
    HttpServer::new(config).unwrap().router()
}

/// Send one request through the router and collect status, headers, body.
#[allow(dead_code)]
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body)
}

/// Every response carries the full cross-origin header set.
#[allow(dead_code)]
pub fn assert_cors_headers(headers: &HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "content-type");
    assert_eq!(headers["access-control-allow-methods"], "GET,POST,OPTIONS");
    assert_eq!(headers["vary"], "Origin");
}

#[allow(dead_code)]
pub fn assert_json_content_type(headers: &HeaderMap) {
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
}
