use super::upload_invoker::UploadInvoker;
use crate::controllers::upload::UploadController;
use crate::domain::shared::HandlerResponse;
use crate::domain::storage::UploadRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// Calls the upload controller directly, for the local server
pub struct InProcessUploadInvoker {
    upload_controller: Arc<UploadController>,
}

impl InProcessUploadInvoker {
    pub fn new(upload_controller: Arc<UploadController>) -> Self {
        Self { upload_controller }
    }
}

#[async_trait]
impl UploadInvoker for InProcessUploadInvoker {
    async fn invoke(&self, request: &UploadRequest) -> Result<HandlerResponse, String> {
        let event = serde_json::to_value(request)
            .map_err(|e| format!("Failed to serialize upload payload: {}", e))?;

        tracing::debug!(filename = %request.filename, "Invoking upload handler in process");

        Ok(self.upload_controller.handle(event).await)
    }
}
