use super::audio_storage_repository::AudioStorageRepository;
use crate::infrastructure::aws::error_chain;
use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use std::sync::Arc;

/// Virtual-hosted style URL of an object in `bucket`
pub fn public_object_url(bucket: &str, key: &str) -> String {
    format!("https://{}.s3.amazonaws.com/{}", bucket, key)
}

/// AWS S3 implementation of audio storage repository
pub struct S3AudioRepository {
    s3_client: Arc<S3Client>,
    bucket: String,
}

impl S3AudioRepository {
    pub fn new(s3_client: Arc<S3Client>, bucket: String) -> Self {
        Self { s3_client, bucket }
    }
}

#[async_trait]
impl AudioStorageRepository for S3AudioRepository {
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        let size = body.len();

        tracing::debug!(
            bucket = %self.bucket,
            key = key,
            size_bytes = size,
            "Calling AWS S3 put_object"
        );

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    bucket = %self.bucket,
                    key = key,
                    "AWS S3 put_object failed"
                );
                format!("AWS S3 error: {}", error_chain(&e))
            })?;

        tracing::info!(bucket = %self.bucket, key = key, size_bytes = size, "Object written");

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url(&self.bucket, key)
    }
}
