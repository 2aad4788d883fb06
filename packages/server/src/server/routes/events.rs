use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::Deserialize;

use crate::domains::events::{query_events, EventsResponse, EventsWindow};
use crate::server::app::AppState;

/// Raw query string; values are parsed leniently so `?limit=abc` is ignored
/// rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct EventsParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// GET /events/:marketplace?limit=&offset=
pub async fn events_handler(
    Extension(state): Extension<AppState>,
    Path(marketplace): Path<String>,
    Query(params): Query<EventsParams>,
) -> Json<EventsResponse> {
    let window = EventsWindow::parse(params.offset.as_deref(), params.limit.as_deref());
    Json(query_events(&state.store, &marketplace, window))
}
