use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    marketplaces: Vec<MarketplaceHealth>,
}

#[derive(Serialize)]
pub struct MarketplaceHealth {
    marketplace: String,
    events: usize,
}

/// Health check endpoint
///
/// Always 200 while the process is up; lists what the store currently holds.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let marketplaces = state
        .store
        .marketplaces()
        .into_iter()
        .map(|(marketplace, events)| MarketplaceHealth {
            marketplace,
            events,
        })
        .collect();

    Json(HealthResponse {
        status: "ok".to_string(),
        marketplaces,
    })
}
