//! Account REST API server.
//!
//! Wires the account runtime and the REST API together with
//! command-line configuration and graceful shutdown.

use std::sync::Arc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use account_api::{router::Router, server::Server};
use account_core::{AccountStore, ServerConfig};
use account_runtime::Runtime;

/// Command-line arguments for the account server.
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

    /// Runtime reply timeout in milliseconds
    #[arg(long, default_value_t = 10000)]
    response_timeout_ms: u64,

    /// Capacity of the handler -> runtime request channel
    #[arg(long, default_value_t = 1000)]
    channel_capacity: usize,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            request_timeout_ms: self.request_timeout_ms,
            response_timeout_ms: self.response_timeout_ms,
            request_channel_capacity: self.channel_capacity.max(1),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(args.into_config());
    let addr = config
        .socket_addr()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;

    // Runtime owns the store on its own thread
    let (api_tx, api_rx) = mpsc::channel(config.request_channel_capacity);
    let mut runtime = Runtime::new(AccountStore::with_capacity(config.initial_capacity), api_rx);
    thread::Builder::new()
        .name("account-runtime".to_string())
        .spawn(move || runtime.run())
        .context("Failed to spawn runtime thread")?;

    let router = Router::new(config.clone(), api_tx);
    let server = Server::new(addr, router);

    tracing::info!(
        "Starting account server on {} (request timeout {} ms, response timeout {} ms)",
        addr,
        config.request_timeout_ms,
        config.response_timeout_ms
    );

    let mut server_handle = tokio::spawn(server.serve());

    tokio::select! {
        result = signal::ctrl_c() => {
            result.context("Failed to listen for ctrl_c")?;
            tracing::info!("Shutting down server...");
        }
        result = &mut server_handle => {
            result
                .context("Server task panicked")?
                .context("Server stopped")?;
        }
    }
    server_handle.abort();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let config = Args::parse_from(["account-server"]).into_config();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.request_channel_capacity, 1000);
    }

    #[test]
    fn test_custom_args() {
        let config = Args::parse_from([
            "account-server",
            "--port",
            "9090",
            "--host",
            "0.0.0.0",
            "--channel-capacity",
            "0",
        ])
        .into_config();
        assert_eq!(config.socket_addr().unwrap().port(), 9090);
        assert_eq!(config.request_channel_capacity, 1);
    }
}
