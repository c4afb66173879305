pub mod audio_storage_repository;
pub mod polly_tts_repository;
pub mod s3_audio_repository;
pub mod tts_repository;

pub use audio_storage_repository::AudioStorageRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use s3_audio_repository::S3AudioRepository;
pub use tts_repository::TtsRepository;
