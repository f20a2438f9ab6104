//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`. Use
//! `AppError` (or types that implement `Into<AppError>`) for errors and `?` so they
//! become `HttpAppError` and render consistently (status, body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vidp_core::{AppError, ErrorMetadata, LogLevel};
use vidp_storage::{StorageError, UploadValidationError};

/// JSON body for every 4xx/5xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from vidp-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

fn log_error(error: &AppError) {
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_code = error_code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_code = error_code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_code = error_code, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            detail: app_error.detail_message(),
            timestamp: Utc::now(),
        });

        (status, body).into_response()
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::FileTooLarge { size, max } => AppError::PayloadTooLarge(format!(
                "File size {} bytes exceeds maximum of {} bytes",
                size, max
            )),
            StorageError::EmptyFile => AppError::InvalidInput("File is empty".to_string()),
            StorageError::NotFound(path) => {
                AppError::NotFound(format!("File not found: {}", path))
            }
            StorageError::Io(err) => AppError::Io(err.to_string()),
            StorageError::Config(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

impl From<UploadValidationError> for HttpAppError {
    fn from(err: UploadValidationError) -> Self {
        let app = match err {
            UploadValidationError::UnsupportedContentType {
                content_type,
                allowed,
            } => AppError::UnsupportedMediaType(format!(
                "Unsupported content type '{}'. Allowed types: {}",
                content_type,
                allowed.join(", ")
            )),
            UploadValidationError::FileTooLarge { size, max } => AppError::PayloadTooLarge(
                format!("File size {} bytes exceeds maximum of {} bytes", size, max),
            ),
            UploadValidationError::EmptyFile => {
                AppError::InvalidInput("File is empty".to_string())
            }
        };
        HttpAppError(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error_too_large() {
        let storage_err = StorageError::FileTooLarge {
            size: 1000,
            max: 500,
        };
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::PayloadTooLarge(msg) => {
                assert!(msg.contains("1000"));
                assert!(msg.contains("500"));
            }
            _ => panic!("Expected PayloadTooLarge variant"),
        }
    }

    #[test]
    fn test_from_storage_error_empty_file() {
        let HttpAppError(app_err) = StorageError::EmptyFile.into();
        match app_err {
            AppError::InvalidInput(msg) => assert_eq!(msg, "File is empty"),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_from_storage_error_io() {
        let io_err = std::io::Error::other("disk full");
        let HttpAppError(app_err) = StorageError::Io(io_err).into();
        match app_err {
            AppError::Io(msg) => assert!(msg.contains("disk full")),
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_from_validation_error_unsupported_type() {
        let validation_err = UploadValidationError::UnsupportedContentType {
            content_type: "image/png".to_string(),
            allowed: vec!["video/mp4".to_string()],
        };
        let HttpAppError(app_err) = validation_err.into();
        match app_err {
            AppError::UnsupportedMediaType(msg) => {
                assert!(msg.contains("image/png"));
                assert!(msg.contains("video/mp4"));
            }
            _ => panic!("Expected UnsupportedMediaType variant"),
        }
    }

    /// Verifies the public error response contract: serialized ErrorResponse
    /// has "error", "detail", and "timestamp".
    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse {
            error: "Resource not found".to_string(),
            detail: "Video abc not found".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert!(json.get("error").and_then(|v| v.as_str()).is_some());
        assert!(json.get("detail").and_then(|v| v.as_str()).is_some());
        assert!(json.get("timestamp").and_then(|v| v.as_str()).is_some());
    }
}
