//! Video upload handler.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{multipart::Field, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use vidp_core::models::{VideoRecord, VideoUploadResponse};
use vidp_core::AppError;
use vidp_storage::AllocatedFile;

/// A stored upload awaiting metadata persistence.
struct StoredUpload {
    allocated: AllocatedFile,
    original_filename: String,
    content_type: String,
    size_bytes: u64,
}

#[utoipa::path(
    post,
    path = "/api/v1/videos/upload",
    tag = "videos",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Video uploaded successfully", body = VideoUploadResponse),
        (status = 400, description = "Empty file or malformed multipart", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 415, description = "Unsupported media type", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut stored: Option<StoredUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        if let Some(first) = &stored {
            // A second file field invalidates the whole request; the already
            // stored file must not linger.
            cleanup_stored_file(&state, first).await;
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            )
            .into());
        }

        stored = Some(store_file_field(&state, field).await?);
    }

    let stored = stored
        .ok_or_else(|| AppError::InvalidInput("No file provided in field 'file'".to_string()))?;

    let record = VideoRecord::new(
        stored.allocated.id,
        stored.original_filename.clone(),
        stored.allocated.path.display().to_string(),
        stored.size_bytes as i64,
        stored.content_type.clone(),
    );

    if let Err(e) = state.store.save(record.clone()).await {
        tracing::error!(
            error = %e,
            video_id = %record.id,
            "Failed to save video metadata"
        );
        cleanup_stored_file(&state, &stored).await;
        return Err(e.into());
    }

    tracing::info!(
        video_id = %record.id,
        original_filename = %record.original_filename,
        stored_path = %record.stored_path,
        file_size = record.size_bytes,
        "Video upload successful"
    );

    // Best-effort: processing is the orchestrator's concern and never fails
    // the upload.
    match state
        .orchestrator
        .submit_job(record.id, &record.stored_path)
        .await
    {
        Ok(job) => {
            tracing::debug!(video_id = %record.id, job = %job.name, "Processing job submitted")
        }
        Err(e) => {
            tracing::warn!(error = %e, video_id = %record.id, "Failed to submit processing job")
        }
    }

    let message = format!(
        "Video '{}' uploaded successfully",
        stored.original_filename
    );
    Ok((
        StatusCode::CREATED,
        Json(VideoUploadResponse::new(&record, message)),
    ))
}

/// Validate the declared content type, allocate a destination, and stream the
/// field to disk. The writer enforces the size ceiling and the non-empty
/// check on the streamed byte count and removes partial output on failure.
async fn store_file_field(
    state: &Arc<AppState>,
    field: Field<'_>,
) -> Result<StoredUpload, HttpAppError> {
    let original_filename = field
        .file_name()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let declared_content_type = field
        .content_type()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let content_type = state
        .validator
        .validate_content_type(&declared_content_type)?;

    let allocated = state.storage.allocate(&original_filename);

    tracing::debug!(
        video_id = %allocated.id,
        original_filename = %original_filename,
        content_type = %content_type,
        stored_path = %allocated.path.display(),
        "Storing upload"
    );

    // A client disconnect mid-upload surfaces as a chunk error and is handled
    // like any other I/O failure: the partial file is removed.
    let body = futures::stream::try_unfold(field, |mut field| async move {
        match field.chunk().await {
            Ok(Some(chunk)) => Ok(Some((chunk, field))),
            Ok(None) => Ok(None),
            Err(e) => Err(std::io::Error::other(e.to_string())),
        }
    });

    let size_bytes = state
        .storage
        .write_stream(&allocated.path, Box::pin(body))
        .await?;

    Ok(StoredUpload {
        allocated,
        original_filename,
        content_type,
        size_bytes,
    })
}

/// Delete a stored file after a failed request, logging instead of masking
/// the original error.
async fn cleanup_stored_file(state: &Arc<AppState>, stored: &StoredUpload) {
    if let Err(e) = state.storage.delete(&stored.allocated.path).await {
        tracing::warn!(
            error = %e,
            stored_path = %stored.allocated.path.display(),
            "Failed to clean up stored file after upload failure"
        );
    }
}
