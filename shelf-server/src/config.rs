//! Server configuration from command-line flags and environment variables

use axum::http::HeaderValue;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default tracing filter when neither `RUST_LOG` nor `--log-level` is set
pub const DEFAULT_LOG_FILTER: &str = "shelf_server=debug,tower_http=debug";

/// Origins allowed during local development when nothing is configured
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

#[derive(Debug, Clone, Parser)]
#[command(name = "shelf-server")]
#[command(author, version, about = "Serve an in-memory book library over HTTP", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "SHELF_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "SHELF_PORT", default_value_t = 5555)]
    pub port: u16,

    /// Allowed CORS origins: a comma-separated list, or "*" for any
    #[arg(long, env = "SHELF_CORS_ORIGINS")]
    pub cors_origins: Option<String>,

    /// Tracing filter directive, e.g. "shelf_server=info"
    #[arg(long, env = "SHELF_LOG")]
    pub log_level: Option<String>,
}

/// Which browser origins may call the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl Default for CorsOrigins {
    fn default() -> Self {
        CorsOrigins::List(
            DEV_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect(),
        )
    }
}

impl CorsOrigins {
    /// Parse a comma-separated origin list; unparsable entries are skipped
    pub fn parse(origins: &str) -> Self {
        if origins.trim() == "*" {
            return CorsOrigins::Any;
        }
        let allowed = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsOrigins::List(allowed)
    }
}

impl ServerConfig {
    /// Socket address to bind
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn cors(&self) -> CorsOrigins {
        self.cors_origins
            .as_deref()
            .map(CorsOrigins::parse)
            .unwrap_or_default()
    }

    /// Filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
