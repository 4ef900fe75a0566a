use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use showcase_backend::config::ServerConfig;
use showcase_backend::manifest::ResourceEntry;
use tempfile::tempdir;
use tower::ServiceExt;

fn config_for(root: &std::path::Path) -> ServerConfig {
    let static_dir = root.join("dist");
    let upload_dir = root.join("uploads");
    fs::create_dir_all(&static_dir).expect("static dir");
    fs::create_dir_all(&upload_dir).expect("upload dir");
    fs::write(static_dir.join("index.html"), "<html>app</html>").expect("index");
    ServerConfig {
        port: 0,
        static_dir,
        upload_dir,
    }
}

async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = showcase_backend::app(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

#[tokio::test]
async fn manifest_lists_uploads_without_caching() {
    let tmp = tempdir().expect("tmp");
    let config = config_for(tmp.path());
    fs::write(config.upload_dir.join("guide.pdf"), vec![1u8; 4096]).expect("upload");

    for uri in ["/api/files", "/board_data.json?t=1700000000000"] {
        let (status, headers, body) = get(&config, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "no-cache, no-store, must-revalidate"
        );
        let entries: Vec<ResourceEntry> = serde_json::from_slice(&body).expect("json");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].filename, "guide.pdf");
        assert_eq!(entries[0].size, "4 KB");
    }
}

#[tokio::test]
async fn empty_upload_dir_is_empty_array() {
    let tmp = tempdir().expect("tmp");
    let config = config_for(tmp.path());
    let (status, _, body) = get(&config, "/board_data.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn uploads_are_served() {
    let tmp = tempdir().expect("tmp");
    let config = config_for(tmp.path());
    fs::write(config.upload_dir.join("a.pdf"), b"pdf-bytes").expect("upload");
    let (status, _, body) = get(&config, "/uploads/a.pdf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"pdf-bytes");
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let tmp = tempdir().expect("tmp");
    let config = config_for(tmp.path());
    let (status, _, body) = get(&config, "/resources").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>app</html>");
}

#[tokio::test]
async fn health_check_responds() {
    let tmp = tempdir().expect("tmp");
    let config = config_for(tmp.path());
    let (status, _, body) = get(&config, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}
