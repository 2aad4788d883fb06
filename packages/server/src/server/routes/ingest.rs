use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::events::{ingest_marketplace, IngestError, IngestSummary};
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Run an ingestion for the marketplace and wait for it to finish.
///
/// POST /ingest/:marketplace
pub async fn ingest_handler(
    Extension(state): Extension<AppState>,
    Path(marketplace): Path<String>,
) -> Result<Json<IngestSummary>, IngestError> {
    let summary = ingest_marketplace(
        state.catalog.as_ref(),
        &state.store,
        &marketplace,
        &state.ingest_config,
    )
    .await?;

    Ok(Json(summary))
}

/// POST /ingest and /ingest/ with no marketplace segment
pub async fn missing_marketplace_handler() -> IngestError {
    IngestError::MissingParameter
}
