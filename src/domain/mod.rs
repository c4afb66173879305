pub mod shared;
pub mod storage;
pub mod tts;
