//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `STOREFRONT_*` environment variables and
//! configuration files. Unset values fall back to the defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::StoreConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";
const DEFAULT_DATABASE: &str = "nvsu_db";
const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 10;

/// Server, storage and runtime settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct AppSettings {
    /// Interface to listen on.
    pub host: Option<IpAddr>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// MongoDB connection string.
    pub mongodb_uri: Option<String>,
    /// Database holding the `users`, `products` and `orders` collections.
    pub database: Option<String>,
    /// Deadline in seconds for connecting and for each storage operation.
    pub storage_timeout_secs: Option<u64>,
    /// Serve from a process-local store instead of MongoDB.
    #[ortho_config(default = false)]
    pub in_memory: bool,
}

impl AppSettings {
    /// Socket address to bind, defaulting to `0.0.0.0:3000`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    pub fn mongodb_uri(&self) -> &str {
        self.mongodb_uri.as_deref().unwrap_or(DEFAULT_MONGODB_URI)
    }

    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    pub fn storage_timeout(&self) -> Duration {
        Duration::from_secs(
            self.storage_timeout_secs
                .unwrap_or(DEFAULT_STORAGE_TIMEOUT_SECS),
        )
    }

    /// Document store settings derived from these values.
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.mongodb_uri(), self.database()).with_timeout(self.storage_timeout())
    }
}
