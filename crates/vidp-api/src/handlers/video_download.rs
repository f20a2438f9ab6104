//! Video download handler: streams stored bytes back to the client.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;
use vidp_core::AppError;

#[utoipa::path(
    get,
    path = "/api/v1/videos/{video_id}/download",
    tag = "videos",
    params(
        ("video_id" = Uuid, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video file stream"),
        (status = 404, description = "Video or file not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn download_video(
    Path(video_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HttpAppError> {
    let record = state.store.get(video_id).await?;

    let stream = state
        .storage
        .read_stream(std::path::Path::new(&record.stored_path))
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                video_id = %video_id,
                stored_path = %record.stored_path,
                "Failed to open stored video"
            );
            HttpAppError::from(e)
        })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, record.content_type)
        .header(header::CONTENT_LENGTH, record.size_bytes)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", record.original_filename),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)).into())
}
