//! VidP Core Library
//!
//! Shared foundation for the VidP video-upload backend: configuration,
//! the unified error type, domain models, and upload constants.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
