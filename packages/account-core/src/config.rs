//! Server configuration.

use std::net::{AddrParseError, SocketAddr};

/// Account service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request body read timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Runtime reply timeout in milliseconds
    pub response_timeout_ms: u64,
    /// Capacity of the handler -> runtime request channel
    pub request_channel_capacity: usize,
    /// Initial store capacity in records
    pub initial_capacity: usize,
}

impl ServerConfig {
    /// Parses `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_ms: 5000,  // 5 seconds default
            response_timeout_ms: 10000, // 10 seconds default
            request_channel_capacity: 1000,
            initial_capacity: 64,
        }
    }
}
