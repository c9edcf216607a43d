//! Word-similarity proxy.
//!
//! ```text
//!     Client ──▶ ?value= / ?word= / {"value"} ──▶ similarity-proxy ──▶ POST {word1, word2} ──▶ Upstream
//!     Client ◀── upstream JSON | {error, details?} ◀──────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use similarity_proxy::config::{load_config, validate_config, ConfigError, SimilarityConfig};
use similarity_proxy::http::HttpServer;
use similarity_proxy::lifecycle::Shutdown;
use similarity_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "similarity-proxy", version)]
#[command(about = "Compares a word against a fixed reference word via an upstream similarity API")]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimilarityConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_tracing(&config.observability.log_level);

    tracing::info!("similarity-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        config_file = ?cli.config,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
