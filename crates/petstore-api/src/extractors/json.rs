//! JSON body extractor that rejects with a failure envelope.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use petstore_core::types::{ErrorDetail, Response};

/// Drop-in replacement for [`axum::Json`] whose rejection is a failure
/// envelope, so malformed bodies are answered in the envelope format.
///
/// The envelope `code` is the rejection's own status: 400 for syntax
/// errors, 415 for a missing JSON content type, 422 for shape mismatches.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response<()>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_envelope(&rejection)),
        }
    }
}

fn rejection_to_envelope(rejection: &JsonRejection) -> Response<()> {
    let status = rejection.status().as_u16();
    let message = rejection.body_text();
    tracing::debug!(status, error = %message, "Rejected request body");

    Response::fail(
        status,
        [ErrorDetail::new(i32::from(status), message).with_target("body")],
    )
}
