//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and exist only for the
//! generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Identifier assigned on creation.
    #[schema(example = 1)]
    id: i64,
    /// Name as submitted, surrounding whitespace included.
    #[schema(example = "John")]
    name: String,
    /// Age in years.
    #[schema(example = 10)]
    age: i32,
    /// Creation timestamp.
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    /// Last modification timestamp.
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
    /// Soft-deletion timestamp; omitted for live users.
    #[schema(value_type = Option<String>, format = DateTime)]
    deleted_at: Option<String>,
}

/// OpenAPI schema for [`crate::domain::UserDraft`].
///
/// Request body for create and update. Missing fields default to empty or
/// zero and then fail validation; unknown fields such as `id` are ignored.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserDraft)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserDraftSchema {
    /// Between 2 and 100 characters once trimmed.
    #[schema(example = "John")]
    name: String,
    /// Between 1 and 150.
    #[schema(example = 10)]
    age: i64,
}

/// Envelope returned by `GET /users/list`.
#[derive(ToSchema)]
#[schema(as = UserListEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserListEnvelopeSchema {
    /// Users on success, `null` on failure.
    data: Option<Vec<UserSchema>>,
    /// Error message on failure, `null` on success.
    #[schema(example = "user repository query failed: database error")]
    error: Option<String>,
}

/// Envelope returned by `POST /users/create`.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    /// Created user on success, `null` on failure.
    data: Option<UserSchema>,
    /// Error message on failure, `null` on success.
    #[schema(example = "age seems unrealistic")]
    error: Option<String>,
}
