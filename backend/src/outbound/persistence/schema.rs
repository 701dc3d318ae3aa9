//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// User records.
    ///
    /// Rows are never physically removed; soft deletion sets `deleted_at`.
    users (id) {
        /// Primary key assigned by `BIGSERIAL`.
        id -> Int8,
        /// Name as supplied by the client.
        name -> Text,
        /// Age in years.
        age -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
        /// Soft deletion marker; `NULL` for live rows.
        deleted_at -> Nullable<Timestamptz>,
    }
}
