use restaurant_chat_relay::config::Config;
use restaurant_chat_relay::routes::create_router;
use restaurant_chat_relay::state::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\"></div></body></html>";
const APP_JS: &str = "console.log('menu');";

fn build_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir(dir.path().join("static")).unwrap();
    std::fs::write(dir.path().join("static").join("app.js"), APP_JS).unwrap();
    dir
}

fn app(static_dir: PathBuf) -> Router {
    let config = Config {
        static_dir,
        ..Config::default()
    };
    let state = Arc::new(AppState::new(config).unwrap());
    create_router().with_state(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body_bytes).into_owned())
}

#[tokio::test]
async fn test_root_serves_index() {
    let dir = build_dir();
    let (status, body) = get(app(dir.path().to_path_buf()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn test_existing_asset_is_served() {
    let dir = build_dir();
    let (status, body) = get(app(dir.path().to_path_buf()), "/static/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, APP_JS);
}

#[tokio::test]
async fn test_client_route_falls_back_to_index() {
    let dir = build_dir();
    let (status, body) = get(app(dir.path().to_path_buf()), "/reservations/today").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn test_unknown_api_path_is_not_the_index() {
    let dir = build_dir();
    let (status, body) = get(app(dir.path().to_path_buf()), "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, INDEX_HTML);
}

#[tokio::test]
async fn test_non_get_request_does_not_fall_back() {
    let dir = build_dir();
    let response = app(dir.path().to_path_buf())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reservations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_bundle_is_not_found() {
    let dir = TempDir::new().unwrap();
    let (status, _) = get(app(dir.path().join("build")), "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let dir = build_dir();
    let (status, body) = get(app(dir.path().to_path_buf()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}
