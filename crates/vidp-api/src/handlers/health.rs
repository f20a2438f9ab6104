//! API info and health check handlers.

use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// Root endpoint: basic API info and the endpoint map.
pub async fn root_info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": format!("Welcome to the {} API", state.config.app_name),
        "description": "Backend service for video uploads and processing orchestration",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs",
        "endpoints": {
            "upload_video": "/api/v1/videos/upload",
            "list_videos": "/api/v1/videos/",
            "video_health": "/api/v1/videos/health",
            "storage_stats": "/api/v1/videos/stats",
            "api_health": "/api/v1/status/health"
        }
    }))
}

/// Liveness probe - process is running.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "message": format!("{} is running", state.config.app_name),
        "storage_configured": true,
        "mongodb_configured": false,
        "kubernetes_configured": false
    }))
}

/// Global API health: service map.
#[utoipa::path(
    get,
    path = "/api/v1/status/health",
    tag = "health",
    responses(
        (status = 200, description = "API status with per-service states")
    )
)]
pub async fn api_health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "api_name": state.config.app_name,
        "version": env!("CARGO_PKG_VERSION"),
        "message": "API operational",
        "services": {
            "video_upload": "operational",
            "file_storage": "operational",
            "mongodb": "not_configured",
            "kubernetes": "not_configured"
        }
    }))
}

/// Video service health.
#[utoipa::path(
    get,
    path = "/api/v1/videos/health",
    tag = "health",
    responses(
        (status = 200, description = "Video upload service status")
    )
)]
pub async fn videos_health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "video-upload",
        "message": "Video upload service operational"
    }))
}
