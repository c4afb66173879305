use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("upload invocation error: {0}")]
    Invocation(String),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Provider(msg) => AppError::Provider(msg),
            TtsServiceError::Invocation(msg) => AppError::Invocation(msg),
        }
    }
}
