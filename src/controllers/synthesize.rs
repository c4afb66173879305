use axum::{body::Bytes, extract::State, http::StatusCode, Extension};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::{
        shared::{parse_event, HandlerResponse},
        tts::{SynthesisRequest, SynthesisResult, TtsService, TtsServiceApi},
    },
    error::AppResult,
    infrastructure::http::RequestId,
};

use super::event_from_body;

pub struct SynthesizeController {
    tts_service: Arc<TtsService>,
}

impl SynthesizeController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// Handle one synthesize invocation. Every failure becomes a structured response.
    pub async fn handle(&self, event: Value) -> HandlerResponse {
        match self.process(event).await {
            Ok(result) => HandlerResponse::json(StatusCode::OK, &result),
            Err(err) => err.into_handler_response(),
        }
    }

    async fn process(&self, event: Value) -> AppResult<SynthesisResult> {
        let request: SynthesisRequest = parse_event(event)?;
        let result = self.tts_service.synthesize(request).await?;

        tracing::info!(filename = %result.filename, "Synthesis completed");

        Ok(result)
    }

    /// POST /synthesize - Convert text to speech and store it
    pub async fn synthesize(
        State(controller): State<Arc<SynthesizeController>>,
        Extension(request_id): Extension<RequestId>,
        body: Bytes,
    ) -> HandlerResponse {
        tracing::info!(request_id = %request_id.0, "POST /synthesize");

        match event_from_body(&body) {
            Ok(event) => controller.handle(event).await,
            Err(err) => err.into_handler_response(),
        }
    }
}
