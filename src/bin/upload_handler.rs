use std::sync::Arc;
use cloud_tts_backend::controllers::upload::UploadController;
use cloud_tts_backend::domain::storage::StorageService;
use cloud_tts_backend::infrastructure::aws::load_aws_config;
use cloud_tts_backend::infrastructure::config::Config;
use cloud_tts_backend::infrastructure::lambda::serve_upload;
use cloud_tts_backend::infrastructure::logging::init_logging;
use cloud_tts_backend::infrastructure::repositories::S3AudioRepository;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = Config::from_env()?;
    init_logging(&config);

    tracing::info!(bucket = %config.bucket_name, "Starting upload handler");

    let aws_config = load_aws_config(&config.aws_region).await;
    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));

    let storage_repo = Arc::new(S3AudioRepository::new(s3_client, config.bucket_name.clone()));
    let storage_service = Arc::new(StorageService::new(storage_repo));
    let controller = Arc::new(UploadController::new(storage_service));

    serve_upload(controller).await
}
