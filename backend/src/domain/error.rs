//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter is the only layer
//! that turns them into status codes and response bodies; everything below
//! it returns them unchanged.

use super::ports::UserPersistenceError;
use super::user::{AGE_MAX, NAME_MAX, NAME_MIN, UserId};

/// Failures raised while validating or persisting users.
///
/// Validation variants are reported in rule order, first violation wins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    /// No user payload was supplied.
    #[error("user object cannot be nil")]
    NilInput,
    /// The trimmed name is empty.
    #[error("name is required")]
    NameRequired,
    /// The trimmed name is shorter than [`NAME_MIN`].
    #[error("name must be at least {min} characters long")]
    NameTooShort { min: usize },
    /// The trimmed name is longer than [`NAME_MAX`].
    #[error("name cannot exceed {max} characters")]
    NameTooLong { max: usize },
    /// Age is zero or negative.
    #[error("age must be positive")]
    AgeNotPositive,
    /// Age is above [`AGE_MAX`].
    #[error("age seems unrealistic")]
    AgeUnrealistic { max: i64 },
    /// No live user carries the identifier.
    #[error("user with ID {id} not found")]
    NotFound { id: UserId },
    /// Storage could not be reached or the statement failed.
    #[error(transparent)]
    Storage(#[from] UserPersistenceError),
}

impl UserError {
    /// Name shorter than the configured minimum.
    #[must_use]
    pub const fn name_too_short() -> Self {
        Self::NameTooShort { min: NAME_MIN }
    }

    /// Name longer than the configured maximum.
    #[must_use]
    pub const fn name_too_long() -> Self {
        Self::NameTooLong { max: NAME_MAX }
    }

    /// Age above the configured maximum.
    #[must_use]
    pub const fn age_unrealistic() -> Self {
        Self::AgeUnrealistic { max: AGE_MAX }
    }

    /// Missing live record for `id`.
    #[must_use]
    pub const fn not_found(id: UserId) -> Self {
        Self::NotFound { id }
    }

    /// True when the caller supplied bad input or referenced a missing
    /// record, as opposed to an unexpected storage failure.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
