//! Projects API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ tower-http layers (request id, trace, CORS, timeout, body limit)
//!                          │
//!                          ▼
//!                      request log ──▶ id guard (/projects/{id}) ──▶ handler
//!                                                                      │
//!                                                                      ▼
//!                                                               ProjectStore
//!                                                             (in-memory, ordered)
//! ```
//!
//! Configuration comes from an optional TOML file; `--bind` overrides the
//! listener address from the file.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use projects_api::config::{load_config, validation::validate_config, ServiceConfig};
use projects_api::lifecycle::{signals, Shutdown};
use projects_api::observability::{logging, metrics};
use projects_api::HttpServer;

#[derive(Parser)]
#[command(name = "projects-api")]
#[command(about = "In-memory projects CRUD service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(projects_api::config::ConfigError::Validation)?;
    }

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // A bind failure ends the process.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Back-end started");

    let shutdown = Shutdown::new();
    signals::spawn_ctrl_c_handler(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
