//! user-relay binary entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use user_relay::config::load_config;
use user_relay::http::HttpServer;
use user_relay::lifecycle::Shutdown;
use user_relay::observability::init_logging;
use user_relay::relay::{HttpUpstreamClient, Relay};

#[derive(Parser)]
#[command(name = "user-relay")]
#[command(about = "HTTP relay for an upstream user-management API", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "relay.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Build the outbound client and relay
    let client = Arc::new(HttpUpstreamClient::new(&config.timeouts)?);
    let relay = Arc::new(Relay::new(config.upstream.base_url.clone(), client));

    // Create and run the HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, relay);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
