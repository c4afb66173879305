use serde::Deserialize;
use std::env;

pub const DEFAULT_AWS_REGION: &str = "ap-southeast-2";
pub const DEFAULT_BUCKET_NAME: &str = "dinuka-tts-audio-bucket";
pub const DEFAULT_VOICE_ID: &str = "Joanna";
pub const DEFAULT_TEXT: &str = "Hello, this is a test.";
pub const DEFAULT_UPLOAD_FUNCTION_NAME: &str = "S3UploadLambda";

/// Set by the Lambda execution environment
const LAMBDA_FUNCTION_NAME_VAR: &str = "AWS_LAMBDA_FUNCTION_NAME";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub aws_region: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Storage
    pub bucket_name: String,
    // Synthesis
    pub voice_id: String,
    pub default_text: String,
    // Inter-function invocation
    pub upload_function_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            aws_region: DEFAULT_AWS_REGION.to_string(),
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            bucket_name: DEFAULT_BUCKET_NAME.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            default_text: DEFAULT_TEXT.to_string(),
            upload_function_name: DEFAULT_UPLOAD_FUNCTION_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // CloudWatch ingests JSON lines best
        let default_log_format = if running_on_lambda() { "json" } else { "pretty" };

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_AWS_REGION.to_string()),
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| default_log_format.to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            bucket_name: env::var("TTS_BUCKET_NAME")
                .unwrap_or_else(|_| DEFAULT_BUCKET_NAME.to_string()),
            voice_id: env::var("TTS_VOICE_ID").unwrap_or_else(|_| DEFAULT_VOICE_ID.to_string()),
            default_text: env::var("TTS_DEFAULT_TEXT").unwrap_or_else(|_| DEFAULT_TEXT.to_string()),
            upload_function_name: env::var("UPLOAD_FUNCTION_NAME")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_FUNCTION_NAME.to_string()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

pub fn running_on_lambda() -> bool {
    env::var(LAMBDA_FUNCTION_NAME_VAR).is_ok()
}
