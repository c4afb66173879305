use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum StorageServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("malformed audio payload: {0}")]
    Encoding(String),
    #[error("object write failed: {0}")]
    Storage(String),
}

impl From<StorageServiceError> for AppError {
    fn from(err: StorageServiceError) -> Self {
        match err {
            StorageServiceError::Invalid(msg) => AppError::BadRequest(msg),
            StorageServiceError::Encoding(msg) => AppError::Encoding(msg),
            StorageServiceError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
