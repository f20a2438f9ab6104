//! Local filesystem storage for uploaded videos.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use vidp_core::constants::{ALLOWED_VIDEO_EXTENSIONS, DEFAULT_VIDEO_EXTENSION};

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Empty file")]
    EmptyFile,

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A freshly allocated on-disk destination for one upload.
///
/// `id` doubles as the record identifier; `filename` is `{id}.{ext}` with the
/// extension taken from the original filename when allow-listed.
#[derive(Debug, Clone)]
pub struct AllocatedFile {
    pub id: Uuid,
    pub filename: String,
    pub path: PathBuf,
}

/// Pick the stored extension for an original filename: the lowercased
/// extension when it is allow-listed, the default otherwise.
fn extension_for(original_filename: &str) -> String {
    Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .filter(|e| ALLOWED_VIDEO_EXTENSIONS.contains(&e.as_str()))
        .unwrap_or_else(|| DEFAULT_VIDEO_EXTENSION.to_string())
}

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalVideoStorage {
    video_root: PathBuf,
    max_file_size: u64,
}

impl LocalVideoStorage {
    /// Create a new LocalVideoStorage instance, creating the root directory
    /// if it does not exist.
    ///
    /// # Arguments
    /// * `video_root` - Directory uploaded videos are written to
    /// * `max_file_size` - Upload size ceiling in bytes, enforced mid-stream
    pub async fn new(video_root: impl Into<PathBuf>, max_file_size: u64) -> StorageResult<Self> {
        let video_root = video_root.into();

        fs::create_dir_all(&video_root).await.map_err(|e| {
            StorageError::Config(format!(
                "Failed to create storage directory {}: {}",
                video_root.display(),
                e
            ))
        })?;

        Ok(LocalVideoStorage {
            video_root,
            max_file_size,
        })
    }

    pub fn video_root(&self) -> &Path {
        &self.video_root
    }

    /// Allocate a collision-free destination path for an upload.
    ///
    /// The base name is a freshly generated v4 UUID, so two calls never
    /// return the same path; the original filename only influences the
    /// extension.
    pub fn allocate(&self, original_filename: &str) -> AllocatedFile {
        let id = Uuid::new_v4();
        let filename = format!("{}.{}", id, extension_for(original_filename));
        let path = self.video_root.join(&filename);
        AllocatedFile { id, filename, path }
    }

    /// Stream a byte payload to `path`, returning the number of bytes written.
    ///
    /// The size ceiling is enforced on the running byte count while
    /// streaming. On any failure (I/O error, over-limit, empty body, client
    /// disconnect surfaced as a stream error) the partially written file is
    /// removed before the error is returned.
    pub async fn write_stream<S>(&self, path: &Path, mut stream: S) -> StorageResult<u64>
    where
        S: Stream<Item = Result<Bytes, std::io::Error>> + Unpin,
    {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let start = std::time::Instant::now();
        let mut file = fs::File::create(path).await?;
        let mut bytes_written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    self.remove_partial(path).await;
                    return Err(StorageError::Io(e));
                }
            };

            bytes_written += chunk.len() as u64;
            if bytes_written > self.max_file_size {
                self.remove_partial(path).await;
                return Err(StorageError::FileTooLarge {
                    size: bytes_written,
                    max: self.max_file_size,
                });
            }

            if let Err(e) = file.write_all(&chunk).await {
                self.remove_partial(path).await;
                return Err(StorageError::Io(e));
            }
        }

        if bytes_written == 0 {
            self.remove_partial(path).await;
            return Err(StorageError::EmptyFile);
        }

        if let Err(e) = file.sync_all().await {
            self.remove_partial(path).await;
            return Err(StorageError::Io(e));
        }

        tracing::info!(
            path = %path.display(),
            size_bytes = bytes_written,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage write successful"
        );

        Ok(bytes_written)
    }

    /// Delete a stored file. Deleting a missing file is not an error.
    pub async fn delete(&self, path: &Path) -> StorageResult<()> {
        if !fs::try_exists(path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(path).await?;

        tracing::info!(path = %path.display(), "Local storage delete successful");
        Ok(())
    }

    /// Open a stored file as a chunked byte stream.
    pub async fn read_stream(
        &self,
        path: &Path,
    ) -> StorageResult<ReaderStream<fs::File>> {
        if !fs::try_exists(path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(path.display().to_string()));
        }

        let file = fs::File::open(path).await?;
        Ok(ReaderStream::new(file))
    }

    /// Remove partial output after a failed write. Best-effort: a cleanup
    /// failure must not mask the original error.
    async fn remove_partial(&self, path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to remove partial file after write failure"
                );
            }
        } else {
            tracing::debug!(path = %path.display(), "Removed partial file after write failure");
        }
    }
}
