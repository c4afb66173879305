use crate::e2e::helpers;

use cloud_tts_backend::controllers::upload::UploadController;
use cloud_tts_backend::domain::storage::StorageService;
use cloud_tts_backend::infrastructure::repositories::{AudioStorageRepository, S3AudioRepository};
use helpers::aws_mocks::create_unreachable_s3_client;
use helpers::TEST_BUCKET;
use serde_json::json;
use std::sync::Arc;

fn unreachable_repository() -> S3AudioRepository {
    S3AudioRepository::new(
        Arc::new(create_unreachable_s3_client()),
        TEST_BUCKET.to_string(),
    )
}

#[tokio::test]
async fn it_should_report_unreachable_s3_as_error() {
    let repo = unreachable_repository();

    let err = repo
        .put_object("speech_offline.mp3", b"ID3".to_vec(), "audio/mpeg")
        .await
        .unwrap_err();

    assert!(err.starts_with("AWS S3 error"), "unexpected error: {}", err);
    // Readable cause chain, not the SDK's Debug dump
    assert!(!err.contains("DispatchFailure"), "unexpected error: {}", err);
}

#[tokio::test]
async fn it_should_return_structured_500_when_bucket_is_unreachable() {
    let storage_service = Arc::new(StorageService::new(Arc::new(unreachable_repository())));
    let upload_controller = UploadController::new(storage_service);

    let response = upload_controller
        .handle(json!({ "audio": "SUQz", "filename": "speech_offline" }))
        .await;

    assert_eq!(response.status_code, 500);
    let error = response.error_message();
    assert!(error.starts_with("Storage error: AWS S3 error"), "unexpected error: {}", error);
}
