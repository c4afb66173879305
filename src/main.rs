use std::sync::Arc;
use cloud_tts_backend::controllers::synthesize::SynthesizeController;
use cloud_tts_backend::controllers::upload::UploadController;
use cloud_tts_backend::domain::storage::StorageService;
use cloud_tts_backend::domain::tts::TtsService;
use cloud_tts_backend::infrastructure::aws::load_aws_config;
use cloud_tts_backend::infrastructure::config::Config;
use cloud_tts_backend::infrastructure::http::{build_router, start_http_server};
use cloud_tts_backend::infrastructure::invocation::InProcessUploadInvoker;
use cloud_tts_backend::infrastructure::logging::init_logging;
use cloud_tts_backend::infrastructure::repositories::{PollyTtsRepository, S3AudioRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting cloud TTS backend on {}:{}",
        config.host,
        config.port
    );

    let aws_config = load_aws_config(&config.aws_region).await;
    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::info!("AWS Polly and S3 clients initialized");

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    let tts_repo = Arc::new(PollyTtsRepository::new(polly_client));
    let storage_repo = Arc::new(S3AudioRepository::new(s3_client, config.bucket_name.clone()));

    // 2. Upload side
    let storage_service = Arc::new(StorageService::new(storage_repo));
    let upload_controller = Arc::new(UploadController::new(storage_service));

    // 3. Synthesize side, handing off to the upload controller in process
    let upload_invoker = Arc::new(InProcessUploadInvoker::new(upload_controller.clone()));
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        upload_invoker,
        config.voice_id.clone(),
        config.default_text.clone(),
    ));
    let synthesize_controller = Arc::new(SynthesizeController::new(tts_service));

    let router = build_router(synthesize_controller, upload_controller);
    start_http_server(config, router).await?;

    Ok(())
}
