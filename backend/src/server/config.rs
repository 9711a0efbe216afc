//! HTTP server configuration object.

use std::net::SocketAddr;

use storefront::inbound::http::state::HttpState;

/// Bind address and handler state for `create_server`.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) state: HttpState,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, state: HttpState) -> Self {
        Self { bind_addr, state }
    }
}
