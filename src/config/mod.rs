use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024; // 1MB
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub admin_password: String,
    pub max_body_bytes: usize,
    pub log_filter: String,
}

// Keep the admin secret out of logs
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("admin_password", &"<redacted>")
            .field("max_body_bytes", &self.max_body_bytes)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// `ADMIN_PASSWORD` is required and must be non-empty. Everything else
    /// falls back to a default when unset, but a value that is set and does
    /// not parse is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?;

        let host = match lookup("COASTERS_HOST") {
            Some(v) => parse_var("COASTERS_HOST", v)?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("COASTERS_PORT") {
            Some(v) => parse_var("COASTERS_PORT", v)?,
            None => match lookup("PORT") {
                Some(v) => parse_var("PORT", v)?,
                None => DEFAULT_PORT,
            },
        };

        let max_body_bytes = match lookup("COASTERS_MAX_BODY_BYTES") {
            Some(v) => parse_var("COASTERS_MAX_BODY_BYTES", v)?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        let log_filter = lookup("RUST_LOG")
            .or_else(|| lookup("COASTERS_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            host,
            port,
            admin_password,
            max_body_bytes,
            log_filter,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
