//! HTTP inbound adapter exposing the user REST endpoints.

pub mod envelope;
pub mod error;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiResult};
