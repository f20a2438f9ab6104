//! API constants.

/// Versioned API path prefix.
pub const API_PREFIX: &str = "/api/v1";

/// Extra request-body headroom above the file size ceiling, covering
/// multipart framing so the writer's mid-stream check produces the 413.
pub const MULTIPART_OVERHEAD_BYTES: u64 = 1024 * 1024;
