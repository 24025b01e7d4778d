//! Image upload tests against a local stand-in for the image host

use crate::assert_ok;
use assert_matches::assert_matches;
use axum::{extract::Path, routing::post, Json, Router};
use bytes::Bytes;
use hth_server::backend::media::{CloudinaryStore, MediaStore, UploadedFile, PROFILE_FOLDER};
use hth_server::backend::BackendError;
use hth_server::shared::CloudinaryConfig;
use serde_json::{json, Value};
use std::net::SocketAddr;

async fn spawn_image_host(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock image host");
    let addr = listener.local_addr().expect("Mock host has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    addr
}

fn store_for(addr: SocketAddr) -> CloudinaryStore {
    CloudinaryStore::new(CloudinaryConfig {
        cloud_name: "demo".to_string(),
        upload_preset: "unsigned".to_string(),
    })
    .with_api_base(format!("http://{}", addr))
}

fn avatar() -> UploadedFile {
    UploadedFile {
        file_name: "avatar.png".to_string(),
        content_type: Some("image/png".to_string()),
        bytes: Bytes::from_static(b"\x89PNG fake"),
    }
}

#[tokio::test]
async fn test_upload_returns_secure_url() {
    let app = Router::new().route(
        "/{cloud}/image/upload",
        post(|Path(cloud): Path<String>| async move {
            Json(json!({
                "secure_url": format!("https://res.example.com/{}/avatar.png", cloud)
            }))
        }),
    );
    let addr = spawn_image_host(app).await;

    let url = assert_ok!(store_for(addr).upload(PROFILE_FOLDER, avatar()).await);

    assert_eq!(url, "https://res.example.com/demo/avatar.png");
}

#[tokio::test]
async fn test_upload_rejected_by_host() {
    let app = Router::new().route(
        "/{cloud}/image/upload",
        post(|| async {
            (
                axum::http::StatusCode::BAD_REQUEST,
                Json(json!({"error": {"message": "Upload preset not found"}})),
            )
        }),
    );
    let addr = spawn_image_host(app).await;

    let err = store_for(addr)
        .upload(PROFILE_FOLDER, avatar())
        .await
        .expect_err("upload should fail");

    assert_matches!(err, BackendError::MediaError { .. });
    assert_eq!(err.status_code(), axum::http::StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_upload_with_unexpected_body() {
    let app = Router::new().route(
        "/{cloud}/image/upload",
        post(|| async { Json(Value::Null) }),
    );
    let addr = spawn_image_host(app).await;

    let result = store_for(addr).upload(PROFILE_FOLDER, avatar()).await;

    assert!(result.is_err());
}
