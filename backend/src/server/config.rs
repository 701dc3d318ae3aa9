//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use crud_backend::inbound::http::state::HttpState;
use crud_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) request_timeout: Duration,
}

impl ServerConfig {
    /// Construct a configuration serving on `bind_addr` backed by `db_pool`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            request_timeout: HttpState::DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Bound every service call by `timeout`.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
