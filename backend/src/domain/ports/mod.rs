//! Domain ports for the hexagonal boundary.
//!
//! - [`UserRepository`] is the driven port implemented by persistence
//!   adapters.
//! - [`UserValidator`] gates mutations before they reach the repository.
//! - [`UserService`] is the driving port called by the HTTP adapter.

mod user_repository;
mod user_service;
mod user_validator;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::UserService;
pub use user_validator::UserValidator;
