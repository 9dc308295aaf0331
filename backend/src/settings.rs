//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `STUDENTS_*` environment variables or the matching
//! command-line flags (`--database-url`, `--bind-host`, `--port`,
//! `--max-connections`). Field names start with distinct letters so the
//! derived short flags never collide.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid host {host:?}: {message}")]
    InvalidHost { host: String, message: String },
}

/// Runtime settings for the student records service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STUDENTS")]
pub struct AppSettings {
    /// Connection string for the PostgreSQL document store. When unset the
    /// service keeps records in memory.
    pub database_url: Option<String>,
    /// Address to bind.
    pub bind_host: Option<String>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// Maximum pooled database connections.
    pub max_connections: Option<u32>,
}

impl AppSettings {
    /// The configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Host to bind, defaulting to all interfaces.
    pub fn host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to listen on, defaulting to 5000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Pool size, defaulting to 10.
    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Socket address assembled from host and port.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|err: std::net::AddrParseError| {
            SettingsError::InvalidHost {
                host: host.to_owned(),
                message: err.to_string(),
            }
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
