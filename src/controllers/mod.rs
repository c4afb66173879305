pub mod health;
pub mod synthesize;
pub mod upload;

use axum::body::Bytes;
use serde_json::Value;

use crate::error::AppResult;

/// Read an HTTP request body as an invocation event. An empty body is `{}`.
pub(crate) fn event_from_body(body: &Bytes) -> AppResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    Ok(serde_json::from_slice(body)?)
}
