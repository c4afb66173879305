use cloud_tts_backend::controllers::synthesize::SynthesizeController;
use cloud_tts_backend::controllers::upload::UploadController;
use cloud_tts_backend::domain::storage::StorageService;
use cloud_tts_backend::domain::tts::TtsService;
use cloud_tts_backend::infrastructure::config::Config;
use cloud_tts_backend::infrastructure::http::build_router;
use cloud_tts_backend::infrastructure::invocation::InProcessUploadInvoker;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod assertions;

use api_client::TestClient;
use fakes::{FakeTtsRepository, MemoryAudioStorage};

pub const TEST_BUCKET: &str = "test-audio-bucket";

pub struct TestContext {
    pub client: TestClient,
    pub config: Config,
    pub tts_repo: Arc<FakeTtsRepository>,
    pub storage: Arc<MemoryAudioStorage>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let config = test_config();
            let tts_repo = Arc::new(FakeTtsRepository::new(aws_mocks::mock_audio_bytes()));
            let storage = Arc::new(MemoryAudioStorage::new(&config.bucket_name));

            let app = create_app(&config, tts_repo.clone(), storage.clone());

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                config,
                tts_repo,
                storage,
            }
        }
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        bucket_name: TEST_BUCKET.to_string(),
        ..Config::default()
    }
}

/// Wire both handlers the way the development server does
pub fn create_app(
    config: &Config,
    tts_repo: Arc<FakeTtsRepository>,
    storage: Arc<MemoryAudioStorage>,
) -> axum::Router {
    let (synthesize_controller, upload_controller) = create_controllers(config, tts_repo, storage);
    build_router(synthesize_controller, upload_controller)
}

pub fn create_controllers(
    config: &Config,
    tts_repo: Arc<dyn cloud_tts_backend::infrastructure::repositories::TtsRepository>,
    storage: Arc<MemoryAudioStorage>,
) -> (Arc<SynthesizeController>, Arc<UploadController>) {
    let storage_service = Arc::new(StorageService::new(storage));
    let upload_controller = Arc::new(UploadController::new(storage_service));

    let upload_invoker = Arc::new(InProcessUploadInvoker::new(upload_controller.clone()));
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        upload_invoker,
        config.voice_id.clone(),
        config.default_text.clone(),
    ));
    let synthesize_controller = Arc::new(SynthesizeController::new(tts_service));

    (synthesize_controller, upload_controller)
}
