use super::dto::{SynthesisRequest, SynthesisResult};
use super::error::TtsServiceError;
use super::FILENAME_PREFIX;
use crate::domain::storage::UploadRequest;
use crate::infrastructure::invocation::UploadInvoker;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use uuid::Uuid;

/// Fresh artifact name, `speech_<uuid>`. No uniqueness check is made against storage.
pub fn generate_filename() -> String {
    format!("{}{}", FILENAME_PREFIX, Uuid::new_v4())
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    upload_invoker: Arc<dyn UploadInvoker>,
    voice_id: String,
    default_text: String,
}

impl TtsService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        upload_invoker: Arc<dyn UploadInvoker>,
        voice_id: String,
        default_text: String,
    ) -> Self {
        Self {
            tts_repo,
            upload_invoker,
            voice_id,
            default_text,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech and hand the audio off for storage
    ///
    /// This operation:
    /// - Falls back to the default text when none is given
    /// - Calls the synthesis provider once (MP3, configured voice)
    /// - Base64-encodes the audio and names it `speech_<uuid>`
    /// - Waits for the upload handler to store it
    ///
    /// The upload reply is only inspected for failure.
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResult, TtsServiceError> {
        let text = request.text.unwrap_or_else(|| {
            tracing::debug!("No text provided, using default text");
            self.default_text.clone()
        });

        tracing::info!(
            text_length = text.len(),
            voice = %self.voice_id,
            "TTS synthesis request"
        );

        // 1. Synthesize
        let audio_data = self
            .tts_repo
            .synthesize(&text, &self.voice_id)
            .await
            .map_err(TtsServiceError::Provider)?;

        // 2. Encode and name the artifact
        let audio = STANDARD.encode(&audio_data);
        let filename = generate_filename();

        tracing::info!(
            filename = %filename,
            audio_size = audio_data.len(),
            encoded_size = audio.len(),
            "Audio encoded, invoking upload"
        );

        // 3. Store it
        self.store(&audio, &filename).await?;

        Ok(SynthesisResult { audio, filename })
    }
}

impl TtsService {
    async fn store(&self, audio: &str, filename: &str) -> Result<(), TtsServiceError> {
        let request = UploadRequest {
            audio: audio.to_string(),
            filename: filename.to_string(),
        };

        let response = self
            .upload_invoker
            .invoke(&request)
            .await
            .map_err(TtsServiceError::Invocation)?;

        if !response.is_success() {
            return Err(TtsServiceError::Invocation(format!(
                "upload handler returned status {}: {}",
                response.status_code,
                response.error_message()
            )));
        }

        tracing::info!(filename = %filename, "Upload handler acknowledged audio");

        Ok(())
    }
}
