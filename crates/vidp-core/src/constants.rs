//! Upload constants
//!
//! The accepted MIME types and file extensions for video uploads are fixed;
//! they are not environment-tunable.

/// MIME types accepted for video uploads.
pub const ALLOWED_VIDEO_CONTENT_TYPES: [&str; 7] = [
    "video/mp4",
    "video/avi",
    "video/mov",
    "video/wmv",
    "video/flv",
    "video/webm",
    "video/mkv",
];

/// File extensions preserved when allocating a storage path.
pub const ALLOWED_VIDEO_EXTENSIONS: [&str; 7] = ["mp4", "avi", "mov", "wmv", "flv", "webm", "mkv"];

/// Extension used when the original filename has none, or an unrecognized one.
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Default upload size ceiling in MiB.
pub const DEFAULT_MAX_VIDEO_SIZE_MB: u64 = 500;
