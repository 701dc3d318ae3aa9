//! Domain primitives, ports and services for the user resource.
//!
//! Purpose: keep validation and orchestration free of transport and storage
//! concerns. Adapters in `inbound` and `outbound` depend on this module, never
//! the other way round.
//!
//! Public surface:
//! - [`User`], [`UserDraft`], [`UserId`]: the record, its mutable fields and
//!   its identifier.
//! - [`UserError`]: validation, existence and storage failures.
//! - [`UserValidatorService`] and [`UserServiceImpl`]: default
//!   implementations of the [`ports::UserValidator`] and
//!   [`ports::UserService`] ports.

pub mod error;
pub mod ports;
pub mod user;
mod user_service;
mod user_validator;

pub use self::error::UserError;
pub use self::user::{AGE_MAX, NAME_MAX, NAME_MIN, User, UserDraft, UserId, UserIdParseError};
pub use self::user_service::UserServiceImpl;
pub use self::user_validator::{UserValidatorService, validate_age, validate_name};
