//! Server configuration loaded from the environment

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// TCP port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the agent's HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,

    /// TCP port to bind
    pub port: u16,
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse
    #[error("invalid {name}={value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ServerConfig {
    /// Load configuration from `HOST` and `PORT`, falling back to
    /// `127.0.0.1:5000`
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("HOST") {
            config.host = raw.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    name: "HOST",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Ok(raw) = env::var("PORT") {
            config.port = raw
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                    name: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
        }

        Ok(config)
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// The socket address to bind
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}
