use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod manifest;
pub mod handlers {
    pub mod board_handlers;
}

use config::ServerConfig;
use handlers::board_handlers;

pub struct AppState {
    pub upload_dir: PathBuf,
}

async fn health_check() -> &'static str {
    "OK"
}

/// Manifest routes, the uploads directory, and the built site with an
/// `index.html` fallback for client-side routes.
pub fn app(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        upload_dir: config.upload_dir.clone(),
    });

    let manifest_routes = Router::new()
        .route("/api/files", get(board_handlers::list_files))
        .route("/board_data.json", get(board_handlers::list_files))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ));

    let site = ServeDir::new(&config.static_dir)
        .fallback(ServeFile::new(config.static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .merge(manifest_routes)
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
