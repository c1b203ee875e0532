//! Fallback for unmatched routes.

use axum::http::{StatusCode, Uri};

use petstore_core::error::AppError;
use petstore_core::types::ErrorDetail;

/// Answers every unknown route with a 404 failure envelope.
pub async fn not_found(uri: Uri) -> AppError {
    let path = uri.path().to_string();
    AppError::not_found(format!("No route for {path}")).with_detail(
        ErrorDetail::new(i32::from(StatusCode::NOT_FOUND.as_u16()), "Resource not found")
            .with_target(path),
    )
}
