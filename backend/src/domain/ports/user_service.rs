//! Driving port consumed by inbound adapters for user CRUD.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserError, UserId};

/// Use-case surface for the user resource.
///
/// Errors from validation or storage are returned unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List live users. An empty list is not an error.
    async fn list(&self) -> Result<Vec<User>, UserError>;

    /// Validate and create a user, returning the stored record.
    async fn create(&self, user: Option<UserDraft>) -> Result<User, UserError>;

    /// Validate and apply an update to the user at `id`.
    async fn update(&self, user: Option<UserDraft>, id: UserId) -> Result<(), UserError>;

    /// Check existence and soft delete the user at `id`.
    async fn delete(&self, id: UserId) -> Result<(), UserError>;
}
