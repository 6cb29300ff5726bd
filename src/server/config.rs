use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,

    /// Base URL of the hit-statistics service. Hits are only logged when unset.
    pub stats_server_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: listen_addr.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "LISTEN_ADDR".to_string(),
                value: listen_addr.clone(),
            })?,
            stats_server_url: std::env::var("STATS_SERVER_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}
