pub mod in_process_upload_invoker;
pub mod lambda_upload_invoker;
pub mod upload_invoker;

pub use in_process_upload_invoker::InProcessUploadInvoker;
pub use lambda_upload_invoker::LambdaUploadInvoker;
pub use upload_invoker::UploadInvoker;
