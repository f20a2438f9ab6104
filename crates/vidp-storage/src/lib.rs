//! VidP Storage Library
//!
//! Local filesystem storage for uploaded videos: upload validation, storage
//! path allocation, streamed file writing with partial-file cleanup, and
//! chunked reads for downloads.
//!
//! # Path layout
//!
//! Uploaded files live directly under the configured video root as
//! `{uuid}.{ext}`. The original filename never contributes path components,
//! so client input cannot escape the root.

pub mod local;
pub mod validator;

pub use local::{AllocatedFile, LocalVideoStorage, StorageError, StorageResult};
pub use validator::{UploadValidationError, UploadValidator};
