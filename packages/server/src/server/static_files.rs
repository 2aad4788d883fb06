use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Serve the browser UI: `/` is `index.html`, everything else under `/static`.
///
/// Files are read from disk on each request, so the directory can be
/// rebuilt without restarting the server.
pub fn static_routes(static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
}
