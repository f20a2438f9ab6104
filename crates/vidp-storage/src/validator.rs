//! Upload validation: content-type allow-list, size ceiling, empty check.
//!
//! Checks are pure and order-independent. The HTTP layer runs the cheap
//! content-type check before consuming the body; the size checks are applied
//! to the streamed byte count by the file writer.

use thiserror::Error;

/// Validation errors for uploaded files
#[derive(Debug, Error)]
pub enum UploadValidationError {
    #[error("Unsupported content type: {content_type} (allowed: {allowed:?})")]
    UnsupportedContentType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Empty file")]
    EmptyFile,
}

/// Normalize MIME type by stripping parameters (e.g. "video/mp4; codecs=avc1" -> "video/mp4").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Video upload validator
///
/// Holds the MIME allow-list and the size ceiling without coupling to
/// storage implementation details.
#[derive(Clone)]
pub struct UploadValidator {
    max_file_size: u64,
    allowed_content_types: Vec<String>,
}

impl UploadValidator {
    pub fn new(max_file_size: u64, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_content_types,
        }
    }

    /// Validator with the fixed video allow-list and the given ceiling.
    pub fn for_videos(max_file_size: u64) -> Self {
        Self::new(
            max_file_size,
            vidp_core::constants::ALLOWED_VIDEO_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Validate a declared content type against the allow-list. Returns the
    /// normalized (parameter-stripped, lowercased) MIME type on success.
    pub fn validate_content_type(
        &self,
        content_type: &str,
    ) -> Result<String, UploadValidationError> {
        let normalized = normalize_mime_type(content_type).to_lowercase();
        if !self
            .allowed_content_types
            .iter()
            .any(|ct| normalized == ct.to_lowercase())
        {
            return Err(UploadValidationError::UnsupportedContentType {
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }
        Ok(normalized)
    }

    /// Validate a byte count against the empty check and size ceiling.
    pub fn validate_size(&self, size: u64) -> Result<(), UploadValidationError> {
        if size == 0 {
            return Err(UploadValidationError::EmptyFile);
        }
        if size > self.max_file_size {
            return Err(UploadValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }
}
