use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod request_id;
mod response;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use crate::controllers::{health, synthesize::SynthesizeController, upload::UploadController};
use crate::infrastructure::config::Config;

/// Build the local router exposing both handlers over HTTP
pub fn build_router(
    synthesize_controller: Arc<SynthesizeController>,
    upload_controller: Arc<UploadController>,
) -> Router {
    let synthesize_routes = Router::new()
        .route("/synthesize", post(SynthesizeController::synthesize))
        .with_state(synthesize_controller);

    let upload_routes = Router::new()
        .route("/upload", post(UploadController::upload))
        .with_state(upload_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(synthesize_routes)
        .merge(upload_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    router: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
