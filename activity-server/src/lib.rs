pub mod api;
pub mod config;
pub mod errors;
pub mod monitoring;

use std::path::Path;
use std::sync::Arc;

use activity_core::Directory;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::monitoring::MonitoringLayer;

/// Shared state handed to every handler.
///
/// Signup and unregister hold the write lock across their check and mutation,
/// so concurrent requests cannot push an activity past capacity.
pub struct AppState {
    pub directory: RwLock<Directory>,
    pub monitoring: Option<MonitoringLayer>,
}

impl AppState {
    pub fn new(directory: Directory, monitoring: Option<MonitoringLayer>) -> Self {
        Self {
            directory: RwLock::new(directory),
            monitoring,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Directory::new(), None)
    }
}

pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(api::root))
        .route("/activities", get(api::list_activities))
        .route("/activities/:activity_name/signup", post(api::signup))
        .route("/activities/:activity_name/unregister", post(api::unregister))
        .route("/health", get(|| async { "OK" }));

    if config.enable_reset {
        app = app.route("/test/reset", post(api::reset_activities));
    }

    app.nest_service("/static", ServeDir::new(Path::new(&config.static_dir)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
