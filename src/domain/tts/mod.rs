pub mod dto;
pub mod error;
pub mod service;

pub use dto::{SynthesisRequest, SynthesisResult};
pub use error::TtsServiceError;
pub use service::{generate_filename, TtsService, TtsServiceApi};

/// Prefix of every generated audio artifact name
pub const FILENAME_PREFIX: &str = "speech_";
