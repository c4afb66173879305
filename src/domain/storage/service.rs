use super::dto::{UploadRequest, UploadResult};
use super::error::StorageServiceError;
use super::{AUDIO_CONTENT_TYPE, AUDIO_EXTENSION};
use crate::infrastructure::repositories::AudioStorageRepository;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully!";

/// Storage key for a generated audio artifact
pub fn object_key(filename: &str) -> String {
    format!("{}.{}", filename, AUDIO_EXTENSION)
}

pub struct StorageService {
    storage_repo: Arc<dyn AudioStorageRepository>,
}

impl StorageService {
    pub fn new(storage_repo: Arc<dyn AudioStorageRepository>) -> Self {
        Self { storage_repo }
    }
}

#[async_trait]
pub trait StorageServiceApi: Send + Sync {
    /// Persist base64-encoded audio under `<filename>.mp3`
    ///
    /// Existing objects with the same key are overwritten.
    /// Returns the public URL of the stored object.
    async fn upload(&self, request: UploadRequest) -> Result<UploadResult, StorageServiceError>;
}

#[async_trait]
impl StorageServiceApi for StorageService {
    async fn upload(&self, request: UploadRequest) -> Result<UploadResult, StorageServiceError> {
        if request.filename.trim().is_empty() {
            return Err(StorageServiceError::Invalid(
                "filename cannot be empty".to_string(),
            ));
        }

        let audio_data = STANDARD
            .decode(request.audio.as_bytes())
            .map_err(|e| StorageServiceError::Encoding(e.to_string()))?;

        let key = object_key(&request.filename);

        tracing::info!(
            key = %key,
            audio_size = audio_data.len(),
            "Storing synthesized audio"
        );

        self.storage_repo
            .put_object(&key, audio_data, AUDIO_CONTENT_TYPE)
            .await
            .map_err(StorageServiceError::Storage)?;

        let file_url = self.storage_repo.public_url(&key);

        tracing::info!(key = %key, file_url = %file_url, "Audio stored");

        Ok(UploadResult {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            file_url,
        })
    }
}
