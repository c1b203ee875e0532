//! # petstore-api
//!
//! HTTP API layer for the Petstore service built on Axum.
//!
//! Every endpoint, including the fallback and body-rejection paths, answers
//! with the response envelope from `petstore-core`.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
