//! PostgreSQL persistence gateway using Diesel ORM.
//!
//! Provides the [`DieselUserRepository`] implementation of the domain
//! `UserRepository` port, backed by `diesel-async` over a `bb8` pool.
//! Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//! private to this module; only domain types cross the boundary.
//!
//! # Example
//!
//! ```ignore
//! use crud_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/users");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
