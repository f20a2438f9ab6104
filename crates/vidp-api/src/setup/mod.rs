//! Application setup and initialization
//!
//! All application initialization logic lives here, extracted from main.rs
//! so integration tests can build the same router.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vidp_core::Config;
use vidp_db::InMemoryMetadataStore;
use vidp_storage::{LocalVideoStorage, UploadValidator};
use vidp_worker::NoopOrchestrator;

/// Initialize the entire application: storage, metadata store, orchestrator,
/// and the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    let storage = LocalVideoStorage::new(
        config.local_video_path.clone(),
        config.max_video_size_bytes,
    )
    .await
    .context("Failed to initialize local video storage")?;

    let validator = UploadValidator::for_videos(config.max_video_size_bytes);

    // In-memory store and no-op orchestrator are the defaults until the
    // MongoDB and Kubernetes integrations are wired in behind the same
    // traits.
    let state = Arc::new(AppState {
        config: config.clone(),
        validator,
        storage,
        store: Arc::new(InMemoryMetadataStore::new()),
        orchestrator: Arc::new(NoopOrchestrator),
    });

    tracing::info!(
        video_root = %config.local_video_path.display(),
        max_video_size_bytes = config.max_video_size_bytes,
        "Application initialized"
    );

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
