//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Every query that reads or mutates existing rows is restricted to live
//! rows (`deleted_at IS NULL`). Mutations report success whether or not a
//! row matched; the validator is responsible for existence.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, error};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

use super::models::{NewUserRow, UserRow, UserSoftDelete, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to repository connection errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.message())
}

/// Narrow a validated draft age to the `INTEGER` column.
fn column_age(age: i64) -> Result<i32, UserPersistenceError> {
    i32::try_from(age).map_err(|_| UserPersistenceError::query("age exceeds column range"))
}

/// Whether a Diesel failure falls into a known, client-explainable category.
fn is_classified(error: &diesel::result::Error) -> bool {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    matches!(
        error,
        DieselError::NotFound
            | DieselError::QueryBuilderError(_)
            | DieselError::DeserializationError(_)
            | DieselError::DatabaseError(
                DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::CheckViolation,
                _
            )
    )
}

/// Map Diesel errors to sanitised repository errors.
///
/// Driver messages are logged but never returned. Unclassified failures are
/// logged at error level since they surface as a bare `database error`.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let classified = is_classified(&error);
    match (&error, classified) {
        (DieselError::DatabaseError(kind, info), true) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        (DieselError::DatabaseError(kind, info), false) => {
            error!(
                ?kind,
                message = info.message(),
                details = info.details(),
                "unclassified database failure"
            );
        }
        (_, true) => debug!(%error, "diesel operation failed"),
        (_, false) => error!(%error, "unclassified diesel failure"),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            UserPersistenceError::query("user violates a table constraint")
        }
        DieselError::DeserializationError(_) => {
            UserPersistenceError::query("unexpected row format")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .filter(users::deleted_at.is_null())
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let row = NewUserRow {
            name: &draft.name,
            age: column_age(draft.age)?,
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted: UserRow = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(inserted.into())
    }

    async fn update(&self, draft: &UserDraft, id: UserId) -> Result<(), UserPersistenceError> {
        let changes = UserUpdate {
            name: &draft.name,
            age: column_age(draft.age)?,
            updated_at: Utc::now(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(users::table)
            .filter(
                users::id
                    .eq(id.as_i64())
                    .and(users::deleted_at.is_null()),
            )
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            debug!(%id, "update matched no live user");
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let now = Utc::now();
        let changes = UserSoftDelete {
            deleted_at: Some(now),
            updated_at: now,
        };
        let affected = diesel::update(users::table)
            .filter(
                users::id
                    .eq(id.as_i64())
                    .and(users::deleted_at.is_null()),
            )
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            debug!(%id, "soft delete matched no live user");
        }
        Ok(())
    }

    async fn exists(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            users::table.filter(
                users::id
                    .eq(id.as_i64())
                    .and(users::deleted_at.is_null()),
            ),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }
}
