//! Server configuration from environment variables.
//!
//! PORT       listening port (default 5000)
//! BIND_ADDR  interface address (default 0.0.0.0)
//! RUST_LOG   log filter, read by the binaries' tracing subscriber

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "sizing_engine=info,tower_http=debug,axum=debug,warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match read("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let bind_addr = match read("BIND_ADDR") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .with_context(|| format!("BIND_ADDR must be an IP address, got {:?}", raw))?,
            None => DEFAULT_BIND_ADDR,
        };

        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
