//! segment-router
//!
//! Serves the sample API through the segment router.
//!
//! ```text
//!     Client Request
//!     ──▶ listener ──▶ Axum service ──▶ Router::dispatch ──▶ handler
//!                      (trace, timeout)  (match, trace ID)
//! ```

use std::path::PathBuf;

use clap::Parser;

use segment_router::config::{load_config, validate_config, RouterConfig};
use segment_router::observability::{logging, metrics};
use segment_router::{api, Router, Shutdown};

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "HTTP router with segment patterns and trace IDs", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `server.port`, e.g. ":9000" or "127.0.0.1:9000".
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.server.port = bind;
        validate_config(&config)?;
    }

    logging::init(&config.observability.log_level);
    tracing::info!("segment-router v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        listen_address = %config.server.port,
        read_timeout = %config.server.read_timeout,
        write_timeout = %config.server.write_timeout,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // All routes are registered before the server takes ownership.
    let mut router = Router::new();
    api::register(&mut router);
    let server = router.into_server(&config.server)?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();
    server.serve(shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
