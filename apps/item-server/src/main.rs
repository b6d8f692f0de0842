//! REST API server for the in-memory item store.
//!
//! Wires the store to the HTTP routing layer with configuration parsing
//! and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;

use item_api::{config::ApiConfig, router::Router, server::Server};
use item_store::ItemStore;

/// Command-line arguments for the item server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Request body read timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let config = Arc::new(ApiConfig {
        request_timeout_ms: args.request_timeout_ms,
    });

    // The store is process-wide state, initialized empty at startup.
    let store = Arc::new(ItemStore::new());

    let router = Router::new(store, config);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let server = Server::bind(addr, router).await?;

    tracing::info!("Starting item store server...");
    tracing::info!("  Host: {}", args.host);
    tracing::info!("  Port: {}", args.port);
    tracing::info!("  Request timeout: {} ms", args.request_timeout_ms);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            tracing::error!("Server error: {}", e);
        }
    });

    // Wait for Ctrl+C
    signal::ctrl_c().await?;
    tracing::info!("Shutting down server...");
    server_handle.abort();

    Ok(())
}
