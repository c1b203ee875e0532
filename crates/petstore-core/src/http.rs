//! Axum integration: envelopes and errors as HTTP responses.
//!
//! The HTTP status line always mirrors the envelope `code`, so handlers can
//! return a [`Response`] or an [`AppError`] directly.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response as HttpResponse};
use serde::Serialize;

use crate::error::{AppError, EnvelopeError, ErrorKind};
use crate::types::{ErrorDetail, Response, Status};

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.code()).unwrap_or_else(|_| {
            tracing::warn!(code = self.code(), "Envelope code is not a valid HTTP status");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        match serde_json::to_vec(&self) {
            Ok(body) => json_response(status, body),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response envelope");
                serialization_failure(&err)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> HttpResponse {
        let (status, label) = classify(self.kind);

        if label == Status::Error {
            tracing::error!(kind = %self.kind, error = %self.message, "Internal server error");
        } else {
            tracing::debug!(kind = %self.kind, error = %self.message, "Request failed");
        }

        let details = if self.details.is_empty() {
            vec![ErrorDetail::new(i32::from(status.as_u16()), self.message)]
        } else {
            self.details
        };

        Response::<()>::failure(label, status.as_u16(), details).into_response()
    }
}

impl IntoResponse for EnvelopeError {
    fn into_response(self) -> HttpResponse {
        AppError::from(self).into_response()
    }
}

/// HTTP status and envelope status for each error kind.
pub fn classify(kind: ErrorKind) -> (StatusCode, Status) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, Status::Fail),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, Status::Fail),
        ErrorKind::Conflict => (StatusCode::CONFLICT, Status::Fail),
        ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, Status::Fail),
        ErrorKind::Forbidden => (StatusCode::FORBIDDEN, Status::Fail),
        ErrorKind::ServiceUnavailable => (StatusCode::SERVICE_UNAVAILABLE, Status::Error),
        ErrorKind::Internal | ErrorKind::Configuration | ErrorKind::Serialization => {
            (StatusCode::INTERNAL_SERVER_ERROR, Status::Error)
        }
    }
}

fn json_response(status: StatusCode, body: Vec<u8>) -> HttpResponse {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}

fn serialization_failure(err: &serde_json::Error) -> HttpResponse {
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    let envelope = Response::<()>::failure(
        Status::Error,
        status.as_u16(),
        [ErrorDetail::new(
            i32::from(status.as_u16()),
            format!("Failed to serialize response: {err}"),
        )],
    );

    match serde_json::to_vec(&envelope) {
        Ok(body) => json_response(status, body),
        Err(_) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_client_errors_as_fail() {
        assert_eq!(
            classify(ErrorKind::Validation),
            (StatusCode::BAD_REQUEST, Status::Fail)
        );
        assert_eq!(
            classify(ErrorKind::NotFound),
            (StatusCode::NOT_FOUND, Status::Fail)
        );
    }

    #[test]
    fn test_classify_server_errors_as_error() {
        for kind in [
            ErrorKind::Internal,
            ErrorKind::Configuration,
            ErrorKind::Serialization,
        ] {
            assert_eq!(
                classify(kind),
                (StatusCode::INTERNAL_SERVER_ERROR, Status::Error)
            );
        }
    }

    #[test]
    fn test_status_line_mirrors_code() {
        let response = Response::<()>::fail(409, [ErrorDetail::new(1, "taken")]).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_invalid_code_falls_back_to_500() {
        let response = Response::<()>::fail(1000, [ErrorDetail::new(1, "odd")]).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_field_is_server_error() {
        let response = EnvelopeError::MissingField("status").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
