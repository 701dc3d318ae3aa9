//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the [`UserService`] port and remain testable without I/O.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::UserError;
use crate::domain::ports::UserService;
use crate::inbound::http::error::ApiError;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserService>,
    pub request_timeout: Duration,
}

impl HttpState {
    /// Timeout applied when none is configured.
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

    /// Construct state around a user service.
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self {
            users,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request service timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Await a service call, failing with [`ApiError::Timeout`] once the
    /// request timeout elapses. The call is dropped, and with it any pending
    /// storage work, when the deadline passes.
    pub async fn bounded<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, UserError>>,
    {
        tokio::time::timeout(self.request_timeout, call)
            .await
            .map_err(|_| ApiError::Timeout)?
            .map_err(ApiError::from)
    }
}
