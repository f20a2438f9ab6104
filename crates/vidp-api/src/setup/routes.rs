//! Route configuration and setup.

use crate::api_doc::ApiDoc;
use crate::constants::{API_PREFIX, MULTIPART_OVERHEAD_BYTES};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use vidp_core::Config;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    // Body cap sits above the file ceiling so the writer's mid-stream check,
    // which sees file bytes rather than multipart framing, produces the 413.
    let body_limit = (config.max_video_size_bytes + MULTIPART_OVERHEAD_BYTES) as usize;

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);

    let api_routes = Router::new()
        .route("/", get(handlers::health::root_info))
        .route("/health", get(handlers::health::health_check))
        .route(
            &format!("{}/status/health", API_PREFIX),
            get(handlers::health::api_health_check),
        )
        .route(
            &format!("{}/videos/health", API_PREFIX),
            get(handlers::health::videos_health_check),
        )
        .route(
            &format!("{}/videos/upload", API_PREFIX),
            post(handlers::video_upload::upload_video),
        )
        .route(
            &format!("{}/videos", API_PREFIX),
            get(handlers::video_get::list_videos),
        )
        .route(
            &format!("{}/videos/", API_PREFIX),
            get(handlers::video_get::list_videos),
        )
        .route(
            &format!("{}/videos/stats", API_PREFIX),
            get(handlers::stats::storage_stats),
        )
        .route(
            &format!("{}/videos/{{video_id}}", API_PREFIX),
            get(handlers::video_get::get_video),
        )
        .route(
            &format!("{}/videos/{{video_id}}/status", API_PREFIX),
            put(handlers::video_status::update_video_status),
        )
        .route(
            &format!("{}/videos/{{video_id}}/download", API_PREFIX),
            get(handlers::video_download::download_video),
        );

    let app = api_routes
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors)
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();
        CorsLayer::new()
            .allow_origin(origins.map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any)
    };
    Ok(cors)
}
