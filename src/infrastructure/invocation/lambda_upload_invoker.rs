use super::upload_invoker::UploadInvoker;
use crate::domain::shared::HandlerResponse;
use crate::domain::storage::UploadRequest;
use crate::infrastructure::aws::error_chain;
use async_trait::async_trait;
use aws_sdk_lambda::{primitives::Blob, types::InvocationType, Client as LambdaClient};
use std::sync::Arc;

/// Invokes the upload function through the AWS Lambda API
pub struct LambdaUploadInvoker {
    lambda_client: Arc<LambdaClient>,
    function_name: String,
}

impl LambdaUploadInvoker {
    pub fn new(lambda_client: Arc<LambdaClient>, function_name: String) -> Self {
        Self {
            lambda_client,
            function_name,
        }
    }
}

/// Turn the raw reply of a `RequestResponse` invocation into the upload envelope.
///
/// `function_error` is set when the function itself raised instead of
/// returning; the payload then carries the runtime's error document.
pub fn interpret_reply(
    function_name: &str,
    function_error: Option<&str>,
    payload: &[u8],
) -> Result<HandlerResponse, String> {
    if let Some(function_error) = function_error {
        let details = String::from_utf8_lossy(payload);
        tracing::error!(
            function_name = function_name,
            function_error = function_error,
            details = %details,
            "Upload function raised an error"
        );
        return Err(format!(
            "{} raised {}: {}",
            function_name, function_error, details
        ));
    }

    serde_json::from_slice(payload)
        .map_err(|e| format!("Malformed response from {}: {}", function_name, e))
}

#[async_trait]
impl UploadInvoker for LambdaUploadInvoker {
    async fn invoke(&self, request: &UploadRequest) -> Result<HandlerResponse, String> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| format!("Failed to serialize upload payload: {}", e))?;

        tracing::info!(
            function_name = %self.function_name,
            filename = %request.filename,
            payload_size = payload.len(),
            "Invoking upload function"
        );

        let output = self
            .lambda_client
            .invoke()
            .function_name(&self.function_name)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    function_name = %self.function_name,
                    "AWS Lambda invoke failed"
                );
                format!("AWS Lambda error: {}", error_chain(&e))
            })?;

        let body = output.payload().map(|blob| blob.as_ref()).unwrap_or_default();

        tracing::debug!(
            status_code = output.status_code(),
            response_size = body.len(),
            "Upload function returned"
        );

        interpret_reply(&self.function_name, output.function_error(), body)
    }
}
