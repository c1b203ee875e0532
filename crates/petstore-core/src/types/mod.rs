//! Wire types shared by every endpoint.

pub mod error_detail;
pub mod response;
pub mod status;

pub use error_detail::ErrorDetail;
pub use response::{Response, ResponseBuilder, Shape};
pub use status::Status;
