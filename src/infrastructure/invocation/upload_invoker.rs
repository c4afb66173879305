use crate::domain::shared::HandlerResponse;
use crate::domain::storage::UploadRequest;
use async_trait::async_trait;

/// Synchronous hand-off of synthesized audio to the upload handler.
#[async_trait]
pub trait UploadInvoker: Send + Sync {
    /// Invoke the upload handler and wait for its response envelope
    ///
    /// # Errors
    /// Returns error if the handler could not be reached or crashed.
    /// A structured non-200 envelope is returned as `Ok`.
    async fn invoke(&self, request: &UploadRequest) -> Result<HandlerResponse, String>;
}
