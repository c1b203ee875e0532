//! Convenience result type alias for the Petstore API.

use crate::error::AppError;

/// A specialized `Result` type for handlers and services.
pub type AppResult<T> = Result<T, AppError>;
