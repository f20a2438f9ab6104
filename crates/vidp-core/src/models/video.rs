use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use uuid::Uuid;

/// Processing status of an uploaded video.
///
/// Transitions are externally driven: any value may be written at any time
/// through the status-update operation. The future orchestrator is
/// responsible for sequencing them meaningfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Uploaded,
    Processing,
    Completed,
    Failed,
}

impl VideoStatus {
    /// Parse a status string, case-insensitively. Returns `None` for anything
    /// outside the four enumerated values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "uploaded" => Some(VideoStatus::Uploaded),
            "processing" => Some(VideoStatus::Processing),
            "completed" => Some(VideoStatus::Completed),
            "failed" => Some(VideoStatus::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::Uploaded => "uploaded",
            VideoStatus::Processing => "processing",
            VideoStatus::Completed => "completed",
            VideoStatus::Failed => "failed",
        }
    }
}

impl Display for VideoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata descriptor for one uploaded video file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: Uuid,
    /// Client-supplied name, for display only; never used as a storage path.
    pub original_filename: String,
    /// Server-chosen path under the storage root; unique per record.
    pub stored_path: String,
    pub size_bytes: i64,
    pub content_type: String,
    pub status: VideoStatus,
    pub uploaded_at: DateTime<Utc>,
    pub processing_started_at: Option<DateTime<Utc>>,
    pub processing_ended_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
}

impl VideoRecord {
    /// Build a freshly uploaded record. Status starts at `uploaded`.
    pub fn new(
        id: Uuid,
        original_filename: String,
        stored_path: String,
        size_bytes: i64,
        content_type: String,
    ) -> Self {
        VideoRecord {
            id,
            original_filename,
            stored_path,
            size_bytes,
            content_type,
            status: VideoStatus::Uploaded,
            uploaded_at: Utc::now(),
            processing_started_at: None,
            processing_ended_at: None,
            error_message: None,
        }
    }

    /// Apply an externally driven status change, stamping the processing
    /// timestamps as bookkeeping: `processing_started_at` the first time the
    /// record enters `processing`, `processing_ended_at` on `completed` or
    /// `failed`.
    pub fn apply_status(&mut self, new_status: VideoStatus) {
        match new_status {
            VideoStatus::Processing => {
                if self.processing_started_at.is_none() {
                    self.processing_started_at = Some(Utc::now());
                }
            }
            VideoStatus::Completed | VideoStatus::Failed => {
                self.processing_ended_at = Some(Utc::now());
            }
            VideoStatus::Uploaded => {}
        }
        self.status = new_status;
    }
}

/// API representation of a video record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub video_id: Uuid,
    pub filename: String,
    pub file_path: String,
    pub file_size: i64,
    pub content_type: String,
    pub status: VideoStatus,
    pub upload_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_ended_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<VideoRecord> for VideoResponse {
    fn from(record: VideoRecord) -> Self {
        VideoResponse {
            video_id: record.id,
            filename: record.original_filename,
            file_path: record.stored_path,
            file_size: record.size_bytes,
            content_type: record.content_type,
            status: record.status,
            upload_time: record.uploaded_at,
            processing_started_at: record.processing_started_at,
            processing_ended_at: record.processing_ended_at,
            error_message: record.error_message,
        }
    }
}

/// Response returned after a successful upload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoUploadResponse {
    pub video_id: Uuid,
    pub filename: String,
    pub file_path: String,
    pub file_size: i64,
    pub content_type: String,
    pub status: VideoStatus,
    pub upload_time: DateTime<Utc>,
    pub message: String,
}

impl VideoUploadResponse {
    pub fn new(record: &VideoRecord, message: String) -> Self {
        VideoUploadResponse {
            video_id: record.id,
            filename: record.original_filename.clone(),
            file_path: record.stored_path.clone(),
            file_size: record.size_bytes,
            content_type: record.content_type.clone(),
            status: record.status,
            upload_time: record.uploaded_at,
            message,
        }
    }
}

/// Aggregate over the current records in the metadata store.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageStatsResponse {
    pub count: u64,
    pub total_size_bytes: i64,
}
