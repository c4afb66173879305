use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;

use crate::controllers::{synthesize::SynthesizeController, upload::UploadController};
use crate::domain::shared::HandlerResponse;

/// Serve synthesize invocations until the runtime shuts down
pub async fn serve_synthesize(controller: Arc<SynthesizeController>) -> Result<(), Error> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let controller = controller.clone();
        let span = tracing::info_span!("invocation", handler = "synthesize", request_id = %event.context.request_id);
        async move { Ok::<HandlerResponse, Error>(controller.handle(event.payload).await) }
            .instrument(span)
    }))
    .await
}

/// Serve upload invocations until the runtime shuts down
pub async fn serve_upload(controller: Arc<UploadController>) -> Result<(), Error> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let controller = controller.clone();
        let span = tracing::info_span!("invocation", handler = "upload", request_id = %event.context.request_id);
        async move { Ok::<HandlerResponse, Error>(controller.handle(event.payload).await) }
            .instrument(span)
    }))
    .await
}
