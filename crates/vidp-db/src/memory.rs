//! In-memory metadata store.
//!
//! The default backend until a real metadata database is wired in. One
//! explicitly constructed instance lives in the application state; a single
//! lock guards the record map, and a side vector preserves insertion order
//! for listing.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use vidp_core::models::{VideoRecord, VideoStatus};
use vidp_core::AppError;

use crate::traits::MetadataStore;

#[derive(Default)]
struct StoreInner {
    records: HashMap<Uuid, VideoRecord>,
    insertion_order: Vec<Uuid>,
}

/// Lock-guarded in-process record collection.
#[derive(Default)]
pub struct InMemoryMetadataStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetadataStore for InMemoryMetadataStore {
    async fn save(&self, record: VideoRecord) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        if inner.records.contains_key(&record.id) {
            return Err(AppError::Internal(format!(
                "Duplicate video id: {}",
                record.id
            )));
        }
        inner.insertion_order.push(record.id);
        inner.records.insert(record.id, record);
        Ok(())
    }

    async fn get(&self, video_id: Uuid) -> Result<VideoRecord, AppError> {
        let inner = self.inner.read().await;
        inner
            .records
            .get(&video_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))
    }

    async fn list(&self) -> Result<Vec<VideoRecord>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .insertion_order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect())
    }

    async fn update_status(
        &self,
        video_id: Uuid,
        new_status: VideoStatus,
    ) -> Result<VideoRecord, AppError> {
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .get_mut(&video_id)
            .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;
        record.apply_status(new_status);
        Ok(record.clone())
    }
}
