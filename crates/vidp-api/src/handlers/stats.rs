//! Storage statistics handler.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use vidp_core::models::StorageStatsResponse;

#[utoipa::path(
    get,
    path = "/api/v1/videos/stats",
    tag = "videos",
    responses(
        (status = 200, description = "Aggregate over current records", body = StorageStatsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn storage_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.store.list().await?;

    let stats = StorageStatsResponse {
        count: records.len() as u64,
        total_size_bytes: records.iter().map(|r| r.size_bytes).sum(),
    };

    Ok(Json(stats))
}
