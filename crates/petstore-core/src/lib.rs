//! # petstore-core
//!
//! Core crate for the Petstore API. Contains the response envelope and its
//! status/error-detail types, configuration schemas, and the unified error
//! system.
//!
//! The Axum `IntoResponse` implementations live behind the `axum` feature
//! so the envelope can be used without an HTTP stack.

pub mod config;
pub mod error;
#[cfg(feature = "axum")]
pub mod http;
pub mod result;
pub mod types;

pub use error::{AppError, EnvelopeError, ErrorKind};
pub use result::AppResult;
pub use types::{ErrorDetail, Response, Status};
