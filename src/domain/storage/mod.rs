pub mod dto;
pub mod error;
pub mod service;

pub use dto::{UploadRequest, UploadResult};
pub use error::StorageServiceError;
pub use service::{object_key, StorageService, StorageServiceApi};

/// Extension appended to every stored object
pub const AUDIO_EXTENSION: &str = "mp3";

/// Content type written alongside every stored object
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";
