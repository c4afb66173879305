use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::shared::HandlerResponse;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Speech synthesis failed: {0}")]
    Provider(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Upload invocation failed: {0}")]
    Invocation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Error body returned by both handlers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Provider(_)
            | Self::Encoding(_)
            | Self::Invocation(_)
            | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }

    /// Log the failure and convert it into the handler envelope
    pub fn into_handler_response(self) -> HandlerResponse {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Invocation failed"
        );

        HandlerResponse::json(status, &self.to_response())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
