use axum::http::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Envelope returned by every handler invocation.
///
/// Mirrors the API Gateway proxy response shape: `body` is itself a JSON
/// document serialized to a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl HandlerResponse {
    /// Build a JSON response for the given payload
    pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Self {
        let (status, body) = match serde_json::to_string(payload) {
            Ok(body) => (status, body),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": format!("Failed to serialize response: {}", e) })
                    .to_string(),
            ),
        };

        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());

        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == StatusCode::OK.as_u16()
    }

    /// Decode the stringified body
    pub fn parse_body<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Best-effort extraction of the `error` field from a failed response
    pub fn error_message(&self) -> String {
        self.parse_body::<serde_json::Value>()
            .ok()
            .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| self.body.clone())
    }
}
