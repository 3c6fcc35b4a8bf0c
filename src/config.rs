//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_PKG_DIR: &str = "storefront/pkg";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid PORT {value:?}: expected 0-65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Page shell and static assets.
    pub public_dir: PathBuf,
    /// wasm-bindgen output for the browser module, served at `/pkg`.
    pub pkg_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            pkg_dir: PathBuf::from(DEFAULT_PKG_DIR),
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: bind address (default `0.0.0.0`)
    /// - `PORT`: bind port (default 3000)
    /// - `PUBLIC_DIR`: static file root (default `public`)
    /// - `PKG_DIR`: browser module bundle (default `storefront/pkg`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let host = match get("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost { value })?,
            None => defaults.host,
        };
        let port = match get("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort { value })?,
            None => defaults.port,
        };
        let public_dir = get("PUBLIC_DIR").map_or(defaults.public_dir, PathBuf::from);
        let pkg_dir = get("PKG_DIR").map_or(defaults.pkg_dir, PathBuf::from);

        Ok(Self { host, port, public_dir, pkg_dir })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
