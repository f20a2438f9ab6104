//! Domain models.

mod video;

pub use video::{
    StorageStatsResponse, VideoRecord, VideoResponse, VideoStatus, VideoUploadResponse,
};
