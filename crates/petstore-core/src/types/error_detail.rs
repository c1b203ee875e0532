//! A single error cause inside a failure response.

use serde::{Deserialize, Serialize};

/// One entry of the `errors` array of a failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Service-level error code (not the HTTP status).
    pub code: i32,
    /// Human-readable message.
    pub message: String,
    /// Request parameter or part that caused the error, mostly set for
    /// validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl ErrorDetail {
    /// Create an error detail without a target.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            target: None,
        }
    }

    /// Attach the request part that caused this error.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}
