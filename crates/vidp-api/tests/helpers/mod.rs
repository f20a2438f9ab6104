//! Test helpers: build the app router for integration tests.
//!
//! Run from workspace root: `cargo test -p vidp-api --test videos_test` or
//! `cargo test -p vidp-api`. Uploads land in a per-test temp directory; the
//! metadata store is the in-memory default.

use axum_test::TestServer;
use bytes::Bytes;
use std::path::PathBuf;
use tempfile::TempDir;
use vidp_core::Config;

/// API path prefix for tests (e.g. `/api/v1`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", vidp_api::constants::API_PREFIX, path)
}

/// Test application: server and owned storage directory.
pub struct TestApp {
    pub server: TestServer,
    pub video_root: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files currently in the storage directory.
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(&self.video_root)
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Setup a test app with the default 500 MiB ceiling.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_max(500 * 1024 * 1024).await
}

/// Setup a test app with a custom upload size ceiling.
pub async fn setup_test_app_with_max(max_video_size_bytes: u64) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let video_root = temp_dir.path().join("videos");

    let config = Config {
        app_name: "VidP Test".to_string(),
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        local_storage_root: temp_dir.path().to_path_buf(),
        local_video_path: video_root.clone(),
        max_video_size_bytes,
        mongodb_url: "mongodb://localhost:27017".to_string(),
        mongodb_database: "vidp_test".to_string(),
    };

    let (_state, router) = vidp_api::setup::initialize_app(config)
        .await
        .expect("Failed to initialize app");

    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        video_root,
        _temp_dir: temp_dir,
    }
}

const BOUNDARY: &str = "vidp-test-boundary";

/// Build a multipart/form-data body with a single `file` field.
pub fn multipart_body(filename: &str, content_type: &str, data: &[u8]) -> (String, Bytes) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    (
        format!("multipart/form-data; boundary={}", BOUNDARY),
        Bytes::from(body),
    )
}

/// Build a multipart body with no `file` field.
pub fn multipart_body_without_file() -> (String, Bytes) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"comment\"\r\n\r\n");
    body.extend_from_slice(b"not a file");
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    (
        format!("multipart/form-data; boundary={}", BOUNDARY),
        Bytes::from(body),
    )
}

/// Upload a video through the test server.
pub async fn upload_video(
    server: &TestServer,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> axum_test::TestResponse {
    let (request_content_type, body) = multipart_body(filename, content_type, data);
    server
        .post(&api_path("/videos/upload"))
        .add_header("content-type", request_content_type)
        .bytes(body)
        .await
}
