//! Video API integration tests.
//!
//! Run with: `cargo test -p vidp-api --test videos_test`

mod helpers;

use axum::http::StatusCode;
use helpers::{api_path, setup_test_app, setup_test_app_with_max, upload_video};
use vidp_api::error::ErrorResponse;
use vidp_core::models::{StorageStatsResponse, VideoResponse, VideoStatus, VideoUploadResponse};

#[tokio::test]
async fn test_upload_video_success() {
    let app = setup_test_app().await;
    let data = vec![0xABu8; 1_024_000];

    let response = upload_video(app.client(), "clip.mp4", "video/mp4", &data).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: VideoUploadResponse = response.json();
    assert_eq!(body.filename, "clip.mp4");
    assert_eq!(body.file_size, 1_024_000);
    assert_eq!(body.content_type, "video/mp4");
    assert_eq!(body.status, VideoStatus::Uploaded);
    assert!(body.message.contains("clip.mp4"));

    // The returned file_size matches the bytes actually on disk.
    let on_disk = std::fs::metadata(&body.file_path).expect("stored file missing");
    assert_eq!(on_disk.len(), 1_024_000);
    assert!(std::path::Path::new(&body.file_path).starts_with(&app.video_root));
}

#[tokio::test]
async fn test_upload_preserves_allowed_extension() {
    let app = setup_test_app().await;

    let response = upload_video(app.client(), "HOLIDAY.MKV", "video/mkv", b"mkv bytes").await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: VideoUploadResponse = response.json();
    assert!(body.file_path.ends_with(".mkv"));
    assert_eq!(body.filename, "HOLIDAY.MKV");
}

#[tokio::test]
async fn test_upload_rejects_unsupported_content_type() {
    let app = setup_test_app().await;

    let response = upload_video(app.client(), "photo.png", "image/png", b"not a video").await;

    assert_eq!(response.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(app.stored_file_count(), 0);

    let body: ErrorResponse = response.json();
    assert!(body.detail.contains("image/png"));
}

#[tokio::test]
async fn test_upload_rejects_empty_file() {
    let app = setup_test_app().await;

    let response = upload_video(app.client(), "empty.mp4", "video/mp4", b"").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = setup_test_app().await;
    let (content_type, body) = helpers::multipart_body_without_file();

    let response = app
        .client()
        .post(&api_path("/videos/upload"))
        .add_header("content-type", content_type)
        .bytes(body)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_upload_too_large_removes_partial() {
    let app = setup_test_app_with_max(1024).await;
    let data = vec![0u8; 4096];

    let response = upload_video(app.client(), "big.mp4", "video/mp4", &data).await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_get_video_matches_upload() {
    let app = setup_test_app().await;

    let upload = upload_video(app.client(), "clip.mp4", "video/mp4", b"some video data").await;
    let uploaded: VideoUploadResponse = upload.json();

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", uploaded.video_id)))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: VideoResponse = response.json();
    assert_eq!(fetched.video_id, uploaded.video_id);
    assert_eq!(fetched.filename, uploaded.filename);
    assert_eq!(fetched.file_path, uploaded.file_path);
    assert_eq!(fetched.file_size, uploaded.file_size);
    assert_eq!(fetched.content_type, uploaded.content_type);
    assert_eq!(fetched.status, uploaded.status);
    assert_eq!(fetched.upload_time, uploaded.upload_time);
}

#[tokio::test]
async fn test_get_unknown_video_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}", uuid::Uuid::new_v4())))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    // Error body shape: {error, detail, timestamp}.
    let body: serde_json::Value = response.json();
    assert!(body.get("error").is_some());
    assert!(body.get("detail").is_some());
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn test_list_videos_in_insertion_order() {
    let app = setup_test_app().await;

    let mut expected = Vec::new();
    for name in ["a.mp4", "b.mp4", "c.mp4"] {
        let response = upload_video(app.client(), name, "video/mp4", b"data").await;
        let body: VideoUploadResponse = response.json();
        expected.push(body.video_id);
    }

    let response = app.client().get(&api_path("/videos/")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let listed: Vec<VideoResponse> = response.json();
    let listed_ids: Vec<_> = listed.iter().map(|v| v.video_id).collect();
    assert_eq!(listed_ids, expected);
}

#[tokio::test]
async fn test_update_status_flow() {
    let app = setup_test_app().await;

    let upload = upload_video(app.client(), "clip.mp4", "video/mp4", b"video data").await;
    let uploaded: VideoUploadResponse = upload.json();
    assert_eq!(uploaded.status, VideoStatus::Uploaded);

    let response = app
        .client()
        .put(&api_path(&format!(
            "/videos/{}/status?new_status=processing",
            uploaded.video_id
        )))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: VideoResponse = response.json();
    assert_eq!(updated.status, VideoStatus::Processing);
    assert!(updated.processing_started_at.is_some());

    // The change is visible on a subsequent read.
    let fetched: VideoResponse = app
        .client()
        .get(&api_path(&format!("/videos/{}", uploaded.video_id)))
        .await
        .json();
    assert_eq!(fetched.status, VideoStatus::Processing);
}

#[tokio::test]
async fn test_update_status_rejects_invalid_value() {
    let app = setup_test_app().await;

    let upload = upload_video(app.client(), "clip.mp4", "video/mp4", b"video data").await;
    let uploaded: VideoUploadResponse = upload.json();

    let response = app
        .client()
        .put(&api_path(&format!(
            "/videos/{}/status?new_status=exploded",
            uploaded.video_id
        )))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // Nothing was mutated.
    let fetched: VideoResponse = app
        .client()
        .get(&api_path(&format!("/videos/{}", uploaded.video_id)))
        .await
        .json();
    assert_eq!(fetched.status, VideoStatus::Uploaded);
}

#[tokio::test]
async fn test_update_status_unknown_id_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .put(&api_path(&format!(
            "/videos/{}/status?new_status=processing",
            uuid::Uuid::new_v4()
        )))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storage_stats() {
    let app = setup_test_app().await;

    upload_video(app.client(), "a.mp4", "video/mp4", &vec![0u8; 100]).await;
    upload_video(app.client(), "b.webm", "video/webm", &vec![0u8; 250]).await;

    let response = app.client().get(&api_path("/videos/stats")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let stats: StorageStatsResponse = response.json();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.total_size_bytes, 350);
}

#[tokio::test]
async fn test_concurrent_uploads_same_filename() {
    let app = setup_test_app().await;

    let (first, second) = futures::join!(
        upload_video(app.client(), "same.mp4", "video/mp4", b"first upload"),
        upload_video(app.client(), "same.mp4", "video/mp4", b"second upload"),
    );

    assert_eq!(first.status_code(), StatusCode::CREATED);
    assert_eq!(second.status_code(), StatusCode::CREATED);

    let a: VideoUploadResponse = first.json();
    let b: VideoUploadResponse = second.json();
    assert_ne!(a.video_id, b.video_id);
    assert_ne!(a.file_path, b.file_path);
    assert_eq!(app.stored_file_count(), 2);
}

#[tokio::test]
async fn test_download_round_trip() {
    let app = setup_test_app().await;
    let data = b"the exact uploaded bytes";

    let upload = upload_video(app.client(), "clip.mp4", "video/mp4", data).await;
    let uploaded: VideoUploadResponse = upload.json();

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}/download", uploaded.video_id)))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().as_ref(), data);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("missing content-type header");
    assert_eq!(content_type, "video/mp4");
}

#[tokio::test]
async fn test_download_unknown_video_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get(&api_path(&format!("/videos/{}/download", uuid::Uuid::new_v4())))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = setup_test_app().await;

    for path in [
        "/".to_string(),
        "/health".to_string(),
        api_path("/status/health"),
        api_path("/videos/health"),
    ] {
        let response = app.client().get(&path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "path: {}", path);
    }

    let body: serde_json::Value = app.client().get("/health").await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage_configured"], true);
    assert_eq!(body["mongodb_configured"], false);
}
