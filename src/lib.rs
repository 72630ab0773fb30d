pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod relay;
pub mod upstream;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use config::Config;
use reqwest::Client;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the relay service router.
pub fn app(config: Arc<Config>, client: Client) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(relay::chat_handler))
        .route("/health", get(health_handler))
        .layer(Extension(config))
        .layer(Extension(client))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health_handler() -> &'static str {
    "OK"
}
