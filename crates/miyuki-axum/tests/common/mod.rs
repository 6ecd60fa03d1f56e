//! Shared fixtures for gateway router tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use miyuki_axum::{AxumContext, create_router};
use miyuki_core::{DownloadError, DownloadResult, DownloaderPort, JobConfig, OptionSchema};

/// In-memory downloader that records every job it receives.
pub struct RecordingDownloader {
    calls: Mutex<Vec<JobConfig>>,
    failure: Option<DownloadError>,
}

impl RecordingDownloader {
    /// A downloader whose jobs always succeed.
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        })
    }

    /// A downloader whose jobs always fail with `err`.
    pub fn failing(err: DownloadError) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(err),
        })
    }

    /// Jobs received so far, in order.
    pub fn calls(&self) -> Vec<JobConfig> {
        self.calls.lock().unwrap().clone()
    }
}

impl DownloaderPort for RecordingDownloader {
    fn execute_download(&self, config: &JobConfig) -> DownloadResult<()> {
        self.calls.lock().unwrap().push(config.clone());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Router wired to the given downloader.
pub fn test_router(downloader: Arc<RecordingDownloader>) -> Router {
    let ctx = AxumContext::new(OptionSchema::miyuki().unwrap(), downloader);
    create_router(ctx)
}

/// `POST /submit` with a urlencoded body.
pub fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/submit")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// `GET` request for `uri`.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Collect a response body as UTF-8.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
