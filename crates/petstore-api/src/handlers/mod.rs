//! Route handlers.

pub mod echo;
pub mod fallback;
pub mod health;
