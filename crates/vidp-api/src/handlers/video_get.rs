//! Video lookup handlers.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use vidp_core::models::VideoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/videos/{video_id}",
    tag = "videos",
    params(
        ("video_id" = Uuid, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video found", body = VideoResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
pub async fn get_video(
    Path(video_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = state.store.get(video_id).await?;
    Ok(Json(VideoResponse::from(record)))
}

#[utoipa::path(
    get,
    path = "/api/v1/videos/",
    tag = "videos",
    responses(
        (status = 200, description = "All videos in upload order", body = Vec<VideoResponse>)
    )
)]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.store.list().await?;
    let responses: Vec<VideoResponse> = records.into_iter().map(VideoResponse::from).collect();
    Ok(Json(responses))
}
