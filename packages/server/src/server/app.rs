//! Application setup and server configuration.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::events::{EventStore, IngestConfig};
use crate::kernel::BaseEventCatalog;
use crate::server::routes::{events_handler, health_handler, ingest_handler, missing_marketplace_handler};
use crate::server::static_files::static_routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore>,
    pub catalog: Arc<dyn BaseEventCatalog>,
    pub ingest_config: Arc<IngestConfig>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn BaseEventCatalog>, ingest_config: IngestConfig) -> Self {
        Self {
            store: Arc::new(EventStore::new()),
            catalog,
            ingest_config: Arc::new(ingest_config),
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration - any origin, the browser UI may be served elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/ingest/:marketplace", post(ingest_handler))
        // Empty marketplace segment never reaches the path matcher above
        .route("/ingest", post(missing_marketplace_handler))
        .route("/ingest/", post(missing_marketplace_handler))
        .route("/events/:marketplace", get(events_handler))
        .route("/health", get(health_handler))
        .merge(static_routes(static_dir))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
