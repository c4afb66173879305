use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::config::{Config, LogFormat};

fn default_filter(config: &Config) -> &'static str {
    if config.is_development() {
        "cloud_tts_backend=debug,tower_http=debug"
    } else {
        "cloud_tts_backend=info,tower_http=info"
    }
}

/// Install the global subscriber. Call once per process.
pub fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(config).into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
