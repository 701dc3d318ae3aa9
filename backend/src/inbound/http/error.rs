//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep [`UserError`] HTTP-agnostic while giving handlers one place
//! that decides status codes, log levels and response bodies. List and
//! create answer with the JSON envelope; update and delete answer with the
//! plain error message.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{UserError, UserIdParseError};
use crate::inbound::http::envelope::Envelope;

/// Failures surfaced by the user endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request body is not a JSON user.
    #[error("invalid JSON format")]
    InvalidPayload,
    /// The `{id}` path segment is not a non-negative integer.
    #[error(transparent)]
    InvalidIdentifier(#[from] UserIdParseError),
    /// The service did not answer within the request timeout.
    #[error("request timed out")]
    Timeout,
    /// Validation, existence or storage failure from the service.
    #[error(transparent)]
    User(#[from] UserError),
}

/// Result alias for handlers answering with plain text.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result alias for handlers answering with the JSON envelope.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

impl ApiError {
    /// True for failures caused by the request rather than the server.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::InvalidPayload | Self::InvalidIdentifier(_) => true,
            Self::Timeout => false,
            Self::User(err) => err.is_client_error(),
        }
    }

    fn log(&self) {
        if self.is_client_error() {
            warn!(error = %self, "request rejected");
        } else {
            error!(error = %self, "request failed");
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload | Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::SERVICE_UNAVAILABLE,
            Self::User(UserError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::User(UserError::Storage(UserPersistenceError::Connection { .. })) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::User(UserError::Storage(UserPersistenceError::Query { .. })) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::User(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.log();
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

/// [`ApiError`] rendered as a `{data: null, error}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(transparent)]
pub struct EnvelopeError(#[from] pub ApiError);

impl From<UserError> for EnvelopeError {
    fn from(err: UserError) -> Self {
        Self(ApiError::User(err))
    }
}

impl ResponseError for EnvelopeError {
    fn status_code(&self) -> StatusCode {
        self.0.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        self.0.log();
        HttpResponse::build(self.status_code()).json(Envelope::<()>::failure(self.0.to_string()))
    }
}
