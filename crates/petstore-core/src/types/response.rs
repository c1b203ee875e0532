//! The response envelope every API endpoint returns.
//!
//! Two shapes exist on the wire:
//!
//! ```json
//! { "status": "SUCCESS", "code": 200, "data": { "id": 1234, "name": "demo" } }
//! { "status": "FAIL", "code": 500, "errors": [ { "code": 1000, "message": "..." } ] }
//! ```
//!
//! Keys always appear in the order `status`, `code`, `data`, `errors`, and
//! absent values are left out instead of being written as `null`.

use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;
use crate::types::error_detail::ErrorDetail;
use crate::types::status::Status;

/// Standard API response envelope.
///
/// The payload fields are independent options: the success/failure split is
/// upheld by the constructors, not by the type. Use [`Response::shape`] to
/// inspect which payload an instance actually carries.
// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    status: Status,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ErrorDetail>,
}

/// Which payload fields an envelope currently populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Only `data` is set.
    Success,
    /// Only `errors` is set.
    Failure,
    /// Both `data` and `errors` are set.
    Mixed,
    /// Neither payload is set.
    Empty,
}

impl<T> Response<T> {
    /// Build a success-shaped envelope. `data` may be absent.
    pub fn success(status: Status, code: u16, data: Option<T>) -> Self {
        Self {
            status,
            code,
            data,
            errors: Vec::new(),
        }
    }

    /// `SUCCESS` / 200 with the given payload.
    pub fn ok(data: T) -> Self {
        Self::success(Status::Success, 200, Some(data))
    }

    /// Build a failure-shaped envelope. Error order is preserved.
    pub fn failure(
        status: Status,
        code: u16,
        errors: impl IntoIterator<Item = ErrorDetail>,
    ) -> Self {
        Self {
            status,
            code,
            data: None,
            errors: errors.into_iter().collect(),
        }
    }

    /// `FAIL` with the given HTTP code and errors.
    pub fn fail(code: u16, errors: impl IntoIterator<Item = ErrorDetail>) -> Self {
        Self::failure(Status::Fail, code, errors)
    }

    /// Start a builder that accepts possibly-missing inputs.
    pub fn builder() -> ResponseBuilder<T> {
        ResponseBuilder::default()
    }

    /// Outcome label.
    pub fn status(&self) -> Status {
        self.status
    }

    /// HTTP status code mirrored in the body.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Payload, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Error details, empty on success-shaped envelopes.
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    /// Whether the status is `SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Report which payload fields are populated.
    pub fn shape(&self) -> Shape {
        match (self.data.is_some(), !self.errors.is_empty()) {
            (true, false) => Shape::Success,
            (false, true) => Shape::Failure,
            (true, true) => Shape::Mixed,
            (false, false) => Shape::Empty,
        }
    }

    /// Replace the outcome label.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Replace the HTTP status code.
    pub fn set_code(&mut self, code: u16) {
        self.code = code;
    }

    /// Replace the payload; `None` removes it.
    pub fn set_data(&mut self, data: Option<T>) {
        self.data = data;
    }

    /// Replace the error details, keeping their order.
    pub fn set_errors(&mut self, errors: impl IntoIterator<Item = ErrorDetail>) {
        self.errors = errors.into_iter().collect();
    }

    /// Split the envelope into its four fields.
    pub fn into_parts(self) -> (Status, u16, Option<T>, Vec<ErrorDetail>) {
        (self.status, self.code, self.data, self.errors)
    }
}

/// Builder for envelopes whose `status` or `code` may be missing.
///
/// Both `build_*` methods fail with [`EnvelopeError::MissingField`] when a
/// required field was never supplied; `status` is checked before `code`.
#[derive(Debug, Clone)]
pub struct ResponseBuilder<T> {
    status: Option<Status>,
    code: Option<u16>,
    data: Option<T>,
    errors: Vec<ErrorDetail>,
}

impl<T> Default for ResponseBuilder<T> {
    fn default() -> Self {
        Self {
            status: None,
            code: None,
            data: None,
            errors: Vec::new(),
        }
    }
}

impl<T> ResponseBuilder<T> {
    pub fn status(mut self, status: impl Into<Option<Status>>) -> Self {
        self.status = status.into();
        self
    }

    pub fn code(mut self, code: impl Into<Option<u16>>) -> Self {
        self.code = code.into();
        self
    }

    pub fn data(mut self, data: impl Into<Option<T>>) -> Self {
        self.data = data.into();
        self
    }

    /// Append one error detail.
    pub fn error(mut self, detail: ErrorDetail) -> Self {
        self.errors.push(detail);
        self
    }

    /// Append several error details in order.
    pub fn errors(mut self, details: impl IntoIterator<Item = ErrorDetail>) -> Self {
        self.errors.extend(details);
        self
    }

    /// Finish as a success-shaped envelope; collected errors are discarded.
    pub fn build_success(self) -> Result<Response<T>, EnvelopeError> {
        let (status, code) = self.required()?;
        Ok(Response::success(status, code, self.data))
    }

    /// Finish as a failure-shaped envelope; any data is discarded.
    pub fn build_failure(self) -> Result<Response<T>, EnvelopeError> {
        let (status, code) = self.required()?;
        Ok(Response::failure(status, code, self.errors))
    }

    fn required(&self) -> Result<(Status, u16), EnvelopeError> {
        let status = self.status.ok_or(EnvelopeError::MissingField("status"))?;
        let code = self.code.ok_or(EnvelopeError::MissingField("code"))?;
        Ok((status, code))
    }
}
