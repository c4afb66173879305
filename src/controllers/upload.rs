use axum::{body::Bytes, extract::State, http::StatusCode, Extension};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::{
        shared::{parse_event, HandlerResponse},
        storage::{StorageService, StorageServiceApi, UploadRequest, UploadResult},
    },
    error::AppResult,
    infrastructure::http::RequestId,
};

use super::event_from_body;

pub struct UploadController {
    storage_service: Arc<StorageService>,
}

impl UploadController {
    pub fn new(storage_service: Arc<StorageService>) -> Self {
        Self { storage_service }
    }

    /// Handle one upload invocation. Decode and storage failures are
    /// reported as structured responses, never raised to the platform.
    pub async fn handle(&self, event: Value) -> HandlerResponse {
        match self.process(event).await {
            Ok(result) => HandlerResponse::json(StatusCode::OK, &result),
            Err(err) => err.into_handler_response(),
        }
    }

    async fn process(&self, event: Value) -> AppResult<UploadResult> {
        let request: UploadRequest = parse_event(event)?;
        Ok(self.storage_service.upload(request).await?)
    }

    /// POST /upload - Store base64 audio in the bucket
    pub async fn upload(
        State(controller): State<Arc<UploadController>>,
        Extension(request_id): Extension<RequestId>,
        body: Bytes,
    ) -> HandlerResponse {
        tracing::info!(request_id = %request_id.0, "POST /upload");

        match event_from_body(&body) {
            Ok(event) => controller.handle(event).await,
            Err(err) => err.into_handler_response(),
        }
    }
}
