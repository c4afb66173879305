use serde::{Deserialize, Serialize};

/// Payload accepted by the upload handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Base64-encoded MP3 audio
    pub audio: String,
    /// Object name without extension
    pub filename: String,
}

/// Body returned by the upload handler on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub message: String,
    pub file_url: String,
}
