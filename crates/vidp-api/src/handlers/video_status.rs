//! Video status update handler.
//!
//! No state machine constrains transitions: any of the four enumerated
//! values may be written at any time. Sequencing them meaningfully is the
//! caller's (future orchestrator's) responsibility.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use vidp_core::models::{VideoResponse, VideoStatus};
use vidp_core::AppError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct StatusQuery {
    pub new_status: String,
}

#[utoipa::path(
    put,
    path = "/api/v1/videos/{video_id}/status",
    tag = "videos",
    params(
        ("video_id" = Uuid, Path, description = "Video ID"),
        StatusQuery
    ),
    responses(
        (status = 200, description = "Status updated", body = VideoResponse),
        (status = 400, description = "Invalid status value", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
pub async fn update_video_status(
    Path(video_id): Path<Uuid>,
    Query(query): Query<StatusQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let new_status = VideoStatus::parse(&query.new_status).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "Invalid status value '{}'. Allowed values: uploaded, processing, completed, failed",
            query.new_status
        ))
    })?;

    let record = state.store.update_status(video_id, new_status).await?;

    tracing::info!(
        video_id = %video_id,
        new_status = %new_status,
        "Video status updated"
    );

    Ok(Json(VideoResponse::from(record)))
}
