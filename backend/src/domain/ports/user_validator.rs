//! Port for gating user mutations on field rules and record existence.

use async_trait::async_trait;

use crate::domain::{UserDraft, UserError, UserId};

/// Checks a mutation before it is allowed to reach persistence.
///
/// A `None` user is an absent payload and is reported as
/// [`UserError::NilInput`]; it is distinct from a draft with empty fields.
#[async_trait]
pub trait UserValidator: Send + Sync {
    /// Validate the fields of a user about to be created.
    async fn validate_for_create(&self, user: Option<&UserDraft>) -> Result<(), UserError>;

    /// Validate the fields of an update, then check that `id` is live.
    async fn validate_for_update(
        &self,
        user: Option<&UserDraft>,
        id: UserId,
    ) -> Result<(), UserError>;

    /// Check that `id` is live before it is deleted.
    async fn validate_for_delete(&self, id: UserId) -> Result<(), UserError>;
}
