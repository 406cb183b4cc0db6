//! Duo Grid REST API Server
//!
//! Serves gallery layouts and recap statistics for the memories app.

use clap::Parser;
use duo_api::create_router;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Duo Grid REST API Server
#[derive(Parser, Debug)]
#[command(
    name = "duo-server",
    about = "REST API server for the Duo Grid layout engine",
    version
)]
struct Args {
    /// Server host address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "DUO_HOST")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "3000", env = "DUO_PORT")]
    port: u16,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs in JSON format
    #[arg(long, default_value = "false", env = "DUO_JSON_LOGS")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(&args);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid host or port {}:{}: {}", args.host, args.port, e))?;

    let app = create_router();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    info!("Server starting on http://{}", addr);
    info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// Initialize tracing subscriber with appropriate configuration
fn init_tracing(args: &Args) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    if args.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
