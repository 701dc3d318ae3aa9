//! Default [`UserValidator`] backed by a [`UserRepository`] existence check.
//!
//! Rules run cheapest first and stop at the first violation:
//! nil payload, then name (empty, short, long), then age (non-positive,
//! unrealistic), then existence for updates and deletes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserValidator};
use crate::domain::{AGE_MAX, NAME_MAX, NAME_MIN, UserDraft, UserError, UserId};

/// Validator implementing the field and existence rules for users.
#[derive(Clone)]
pub struct UserValidatorService<R> {
    repository: Arc<R>,
}

impl<R> UserValidatorService<R> {
    /// Create a validator consulting `repository` for existence checks.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserValidatorService<R>
where
    R: UserRepository,
{
    async fn ensure_live(&self, id: UserId) -> Result<(), UserError> {
        if self.repository.exists(id).await? {
            Ok(())
        } else {
            Err(UserError::not_found(id))
        }
    }
}

/// Check the name rules against the trimmed name.
///
/// Length is counted in characters, not bytes.
///
/// # Examples
/// ```
/// use crud_backend::domain::{UserError, validate_name};
///
/// assert_eq!(validate_name("   "), Err(UserError::NameRequired));
/// assert!(validate_name("  Jo  ").is_ok());
/// ```
pub fn validate_name(name: &str) -> Result<(), UserError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(UserError::NameRequired);
    }

    let length = trimmed.chars().count();
    if length < NAME_MIN {
        return Err(UserError::name_too_short());
    }
    if length > NAME_MAX {
        return Err(UserError::name_too_long());
    }
    Ok(())
}

/// Check the age rules.
pub fn validate_age(age: i64) -> Result<(), UserError> {
    if age <= 0 {
        return Err(UserError::AgeNotPositive);
    }
    if age > AGE_MAX {
        return Err(UserError::age_unrealistic());
    }
    Ok(())
}

fn validate_fields(user: Option<&UserDraft>) -> Result<(), UserError> {
    let user = user.ok_or(UserError::NilInput)?;
    validate_name(&user.name)?;
    validate_age(user.age)
}

#[async_trait]
impl<R> UserValidator for UserValidatorService<R>
where
    R: UserRepository,
{
    async fn validate_for_create(&self, user: Option<&UserDraft>) -> Result<(), UserError> {
        validate_fields(user)
    }

    async fn validate_for_update(
        &self,
        user: Option<&UserDraft>,
        id: UserId,
    ) -> Result<(), UserError> {
        validate_fields(user)?;
        self.ensure_live(id).await
    }

    async fn validate_for_delete(&self, id: UserId) -> Result<(), UserError> {
        self.ensure_live(id).await
    }
}
