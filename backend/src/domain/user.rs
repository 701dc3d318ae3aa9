//! User record and the client-supplied fields used to create or update it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum allowed length of a trimmed name, in characters.
pub const NAME_MIN: usize = 2;
/// Maximum allowed length of a trimmed name, in characters.
pub const NAME_MAX: usize = 100;
/// Largest age accepted by validation.
pub const AGE_MAX: i64 = 150;

/// Raised when a path segment does not name a user identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("id must be a non-negative integer")]
pub struct UserIdParseError;

/// Identifier assigned by persistence when a user is created.
///
/// Stored as `BIGSERIAL`, so every persisted value is positive. Identifiers
/// parsed from requests may be zero; such a value never matches a record.
///
/// # Examples
/// ```
/// use crud_backend::domain::UserId;
///
/// let id = UserId::parse_path_segment("42").expect("numeric segment");
/// assert_eq!(id.as_i64(), 42);
/// assert!(UserId::parse_path_segment("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Parse the `{id}` segment of a request path.
    ///
    /// Accepts plain decimal digits that fit the storage column; signs and
    /// whitespace are rejected.
    pub fn parse_path_segment(segment: &str) -> Result<Self, UserIdParseError> {
        if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(UserIdParseError);
        }
        let raw: u64 = segment.parse().map_err(|_| UserIdParseError)?;
        i64::try_from(raw).map(Self).map_err(|_| UserIdParseError)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable user fields as supplied by a client.
///
/// Missing keys decode to empty/zero values so that validation, not the
/// decoder, reports them. Keys other than `name` and `age` are ignored,
/// including any `id`; the path identifier addresses updates.
///
/// `age` is decoded at full JSON integer width so out-of-range values reach
/// validation instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDraft {
    pub name: String,
    pub age: i64,
}

impl UserDraft {
    /// Build a draft from its parts.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Persisted user.
///
/// ## Invariants
/// - `id` is assigned on creation and never changes.
/// - `deleted_at` is set only by soft deletion; records carrying it are
///   excluded from listings and existence checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the record has not been soft deleted.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}
