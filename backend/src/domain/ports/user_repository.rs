//! Port abstraction for user persistence adapters and their errors.
//!
//! The repository is the only component that talks to storage. It knows
//! nothing about validation: updates and deletes addressed at a missing
//! identifier succeed silently, because existence is enforced upstream.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage contract for the `users` table.
///
/// "Live" records are those without a deletion timestamp; only they are
/// visible to [`UserRepository::list`] and [`UserRepository::exists`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return all live users ordered by identifier ascending.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a new user and return it with identifier and timestamps set.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Overwrite the mutable fields of the live user at `id`.
    ///
    /// Succeeds even when no row matched.
    async fn update(&self, draft: &UserDraft, id: UserId) -> Result<(), UserPersistenceError>;

    /// Soft delete the live user at `id`.
    ///
    /// Succeeds even when no row matched.
    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError>;

    /// Report whether a live user carries `id`.
    async fn exists(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constructors_accept_str_messages() {
        let connection = UserPersistenceError::connection("refused");
        let query = UserPersistenceError::query("syntax");

        assert_eq!(
            connection.to_string(),
            "user repository connection failed: refused"
        );
        assert_eq!(query.to_string(), "user repository query failed: syntax");
    }
}
