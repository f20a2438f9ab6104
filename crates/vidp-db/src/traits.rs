//! Metadata persistence abstraction.

use async_trait::async_trait;
use uuid::Uuid;

use vidp_core::models::{VideoRecord, VideoStatus};
use vidp_core::AppError;

/// Metadata store abstraction
///
/// All metadata backends (in-memory, MongoDB) must implement this trait so
/// the HTTP surface never depends on a concrete external system.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Persist a freshly created record. The record id must be new; saving a
    /// duplicate id is an error.
    async fn save(&self, record: VideoRecord) -> Result<(), AppError>;

    /// Fetch a record by id. Returns `AppError::NotFound` for unknown ids.
    async fn get(&self, video_id: Uuid) -> Result<VideoRecord, AppError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<VideoRecord>, AppError>;

    /// Apply a status change to a record and return the updated record.
    /// Returns `AppError::NotFound` for unknown ids; nothing is mutated in
    /// that case.
    async fn update_status(
        &self,
        video_id: Uuid,
        new_status: VideoStatus,
    ) -> Result<VideoRecord, AppError>;
}
