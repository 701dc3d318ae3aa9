//! JSON response envelope for list and create.

use serde::{Deserialize, Serialize};

/// `{data, error}` body; exactly one side is non-null.
///
/// # Examples
/// ```
/// use crud_backend::inbound::http::envelope::Envelope;
///
/// let body = serde_json::to_value(Envelope::success(3)).expect("serialises");
/// assert_eq!(body, serde_json::json!({"data": 3, "error": null}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Payload on success.
    pub data: Option<T>,
    /// Error message on failure.
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload.
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Wrap an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }
}
