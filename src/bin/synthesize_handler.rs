use std::sync::Arc;
use cloud_tts_backend::controllers::synthesize::SynthesizeController;
use cloud_tts_backend::domain::tts::TtsService;
use cloud_tts_backend::infrastructure::aws::load_aws_config;
use cloud_tts_backend::infrastructure::config::Config;
use cloud_tts_backend::infrastructure::invocation::LambdaUploadInvoker;
use cloud_tts_backend::infrastructure::lambda::serve_synthesize;
use cloud_tts_backend::infrastructure::logging::init_logging;
use cloud_tts_backend::infrastructure::repositories::PollyTtsRepository;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = Config::from_env()?;
    init_logging(&config);

    tracing::info!(
        voice = %config.voice_id,
        upload_function = %config.upload_function_name,
        "Starting synthesize handler"
    );

    // Clients are built once per cold start and shared across invocations
    let aws_config = load_aws_config(&config.aws_region).await;
    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    let lambda_client = Arc::new(aws_sdk_lambda::Client::new(&aws_config));

    let tts_repo = Arc::new(PollyTtsRepository::new(polly_client));
    let upload_invoker = Arc::new(LambdaUploadInvoker::new(
        lambda_client,
        config.upload_function_name.clone(),
    ));
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        upload_invoker,
        config.voice_id.clone(),
        config.default_text.clone(),
    ));
    let controller = Arc::new(SynthesizeController::new(tts_service));

    serve_synthesize(controller).await
}
