// src/routes/spa.rs
//! Serves the prebuilt frontend bundle, falling back to `index.html` so
//! client-side routing can handle unknown paths.
use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::warn;

use crate::state::SharedState;

pub fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

pub async fn spa_fallback(State(state): State<SharedState>, req: Request) -> Response {
    let servable = matches!(*req.method(), Method::GET | Method::HEAD);
    if !servable || is_api_path(req.uri().path()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let dir = &state.config.static_dir;
    let index = dir.join("index.html");
    let service = ServeDir::new(dir).fallback(ServeFile::new(&index));

    let response = match service.oneshot(req).await {
        Ok(response) => response,
        Err(never) => match never {},
    };
    if response.status() == StatusCode::NOT_FOUND {
        warn!("{} not found. Has the frontend been built?", index.display());
    }
    response.map(Body::new)
}
