use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Decode an invocation payload into a typed request.
///
/// Direct invocations carry the request object itself. Events routed through
/// API Gateway proxy integration wrap it in a `body` field, usually as a JSON
/// string, so that shape is unwrapped first. A proxy event without a body
/// (`null` or blank) decodes like an empty direct payload.
pub fn parse_event<T: DeserializeOwned>(event: Value) -> AppResult<T> {
    let payload = match event {
        Value::Object(mut fields) => match fields.remove("body") {
            Some(Value::String(body)) if body.trim().is_empty() => Value::Object(fields),
            Some(Value::String(body)) => serde_json::from_str(&body).map_err(|e| {
                AppError::BadRequest(format!("Malformed request body: {}", e))
            })?,
            Some(body @ Value::Object(_)) => body,
            Some(other) => {
                fields.insert("body".to_string(), other);
                Value::Object(fields)
            }
            None => Value::Object(fields),
        },
        Value::Null => Value::Object(Default::default()),
        other => other,
    };

    Ok(serde_json::from_value(payload)?)
}
