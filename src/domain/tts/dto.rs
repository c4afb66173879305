use serde::{Deserialize, Serialize};

/// Payload accepted by the synthesize handler
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Body returned by the synthesize handler on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Base64-encoded MP3 audio
    pub audio: String,
    /// `speech_<uuid>`, without extension
    pub filename: String,
}
