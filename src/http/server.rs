//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router: one handler for every path and method
//! - Wire up middleware (request ID, tracing, CORS response headers)
//! - Serve on a bound listener until shutdown

use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::SimilarityConfig;
use crate::http::handler::similarity_handler;
use crate::http::response::cors_headers;
use crate::lifecycle::signals;
use crate::upstream::{ClientBuildError, SimilarityClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<SimilarityClient>,
    pub max_body_bytes: usize,
}

/// HTTP server for the similarity proxy.
pub struct HttpServer {
    router: Router,
    config: SimilarityConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SimilarityConfig) -> Result<Self, ClientBuildError> {
        let client = SimilarityClient::new(&config.upstream)?;

        let state = AppState {
            client: Arc::new(client),
            max_body_bytes: config.limits.max_body_bytes,
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", any(similarity_handler))
            .route("/{*path}", any(similarity_handler))
            .with_state(state);

        for (name, value) in cors_headers() {
            router = router.layer(SetResponseHeaderLayer::overriding(name, value));
        }

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until an OS signal arrives or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            reference_word = %self.config.upstream.reference_word,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }
}

async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = signals::wait_for_signal() => {}
        _ = shutdown.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}
