//! Outcome labels carried by every API response.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Generic outcome classification of an API call.
///
/// Serialized in upper case (`"SUCCESS"`, `"FAIL"`, `"ERROR"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The request was handled and the payload is in `data`.
    Success,
    /// The request was rejected (bad input, missing resource, ...).
    Fail,
    /// The server failed while handling the request.
    Error,
}

impl Status {
    /// Whether this status denotes a successful call.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SUCCESS" => Ok(Self::Success),
            "FAIL" => Ok(Self::Fail),
            "ERROR" => Ok(Self::Error),
            other => Err(AppError::validation(format!("Unknown status: {other}"))),
        }
    }
}
