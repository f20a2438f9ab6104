//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use vidp_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VidP API",
        version = "0.1.0",
        description = "Backend service for video uploads and processing orchestration. Uploads are validated against a fixed MIME allow-list, stored on the local filesystem, and tracked as metadata records. All video endpoints are versioned under /api/v1/."
    ),
    paths(
        handlers::video_upload::upload_video,
        handlers::video_get::get_video,
        handlers::video_get::list_videos,
        handlers::video_status::update_video_status,
        handlers::video_download::download_video,
        handlers::stats::storage_stats,
        handlers::health::health_check,
        handlers::health::api_health_check,
        handlers::health::videos_health_check,
    ),
    components(schemas(
        models::VideoStatus,
        models::VideoResponse,
        models::VideoUploadResponse,
        models::StorageStatsResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video upload and metadata endpoints"),
        (name = "health", description = "Liveness endpoints")
    )
)]
pub struct ApiDoc;
