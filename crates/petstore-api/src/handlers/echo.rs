//! Echo handler.

use serde_json::Value;

use petstore_core::types::{Response, Status};

use crate::extractors::ApiJson;

/// POST /api/echo
///
/// Returns the submitted JSON as the envelope `data`. A `null` body is an
/// absent payload, so `data` is left out of the response.
pub async fn echo(ApiJson(body): ApiJson<Value>) -> Response<Value> {
    let data = (!body.is_null()).then_some(body);
    Response::success(Status::Success, 200, data)
}
