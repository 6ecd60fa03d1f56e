//! Integration tests for the gateway router.
//!
//! These tests drive the full request pipeline (decode, coerce, invoke,
//! render) against in-memory downloaders.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use miyuki_core::{DownloadError, JobConfig, OptionSchema};
use tower::ServiceExt;

use common::{RecordingDownloader, body_string, form_post, get, test_router};

#[tokio::test]
async fn form_lists_every_option() {
    let app = test_router(RecordingDownloader::succeeding());

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let schema = OptionSchema::miyuki().unwrap();
    assert_eq!(body.matches("<input ").count(), schema.len());
    for spec in &schema {
        assert!(
            body.contains(&format!(r#"name="{}""#, spec.name)),
            "missing control for {}",
            spec.name
        );
    }
}

#[tokio::test]
async fn submit_with_only_ffmpeg_checked() {
    let downloader = RecordingDownloader::succeeding();
    let app = test_router(Arc::clone(&downloader));

    let response = app.oneshot(form_post("ffmpeg=on")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Download completed successfully."));
    assert_eq!(
        downloader.calls(),
        [JobConfig {
            ffmpeg: true,
            ..JobConfig::default()
        }]
    );
}

#[tokio::test]
async fn submit_splits_urls() {
    let downloader = RecordingDownloader::succeeding();
    let app = test_router(Arc::clone(&downloader));

    let response = app
        .oneshot(form_post("urls=http%3A%2F%2Fa+http%3A%2F%2Fb&proxy="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let calls = downloader.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].urls,
        Some(vec!["http://a".to_string(), "http://b".to_string()])
    );
    assert_eq!(calls[0].proxy, None);
}

#[tokio::test]
async fn downloader_failure_is_reported_with_status_ok() {
    let downloader = RecordingDownloader::failing(DownloadError::other("timeout"));
    let app = test_router(Arc::clone(&downloader));

    let response = app
        .oneshot(form_post("search=ABC-123&retry=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Failed to run miyuki command: timeout"));
    assert!(!body.contains("Download completed successfully."));
    assert_eq!(downloader.calls().len(), 1, "no retry on failure");
}

#[tokio::test]
async fn form_is_unchanged_after_submission() {
    let downloader = RecordingDownloader::succeeding();
    let app = test_router(Arc::clone(&downloader));

    let before = body_string(app.clone().oneshot(get("/")).await.unwrap()).await;

    let response = app
        .clone()
        .oneshot(form_post("urls=http%3A%2F%2Fa&cover=on&quality=720"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let after = body_string(app.oneshot(get("/")).await.unwrap()).await;
    assert_eq!(before, after);
    assert!(!after.contains("http://a"));
    assert!(!after.contains("checked"));
}

#[tokio::test]
async fn submit_without_content_type_still_runs() {
    let downloader = RecordingDownloader::succeeding();
    let app = test_router(Arc::clone(&downloader));

    let request = Request::builder()
        .method("POST")
        .uri("/submit")
        .body(Body::from("title=on"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(downloader.calls()[0].title);
}

#[tokio::test]
async fn malformed_body_degrades_to_defaults() {
    let downloader = RecordingDownloader::succeeding();
    let app = test_router(Arc::clone(&downloader));

    let response = app
        .oneshot(form_post("%%%&==&urls=&ffmpeg=&unknown=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Download completed successfully."));
    assert_eq!(downloader.calls(), [JobConfig::default()]);
}

#[tokio::test]
async fn failure_text_is_html_escaped() {
    let downloader =
        RecordingDownloader::failing(DownloadError::process_failed(Some(1), "<bad> url"));
    let app = test_router(downloader);

    let body = body_string(app.oneshot(form_post("urls=x")).await.unwrap()).await;
    assert!(body.contains("Failed to run miyuki command: &lt;bad&gt; url"));
}

#[tokio::test]
async fn get_submit_is_not_allowed() {
    let downloader = RecordingDownloader::succeeding();
    let app = test_router(Arc::clone(&downloader));

    let response = app.oneshot(get("/submit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(downloader.calls().is_empty());
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = test_router(RecordingDownloader::succeeding());

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn options_endpoint_returns_schema_json() {
    let app = test_router(RecordingDownloader::succeeding());

    let response = app.oneshot(get("/api/options")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 16);
    assert_eq!(entries[0]["name"], "urls");
    assert_eq!(entries[0]["kind"], "list");
    assert_eq!(entries[7]["name"], "ffmpeg");
    assert_eq!(entries[7]["kind"], "flag");
    assert_eq!(entries[15]["kind"], "string");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_router(RecordingDownloader::succeeding());

    let response = app.oneshot(get("/downloads")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
