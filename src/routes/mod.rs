// src/routes/mod.rs
pub mod chat;
pub mod spa;

use crate::state::SharedState;
use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chat::{chat_handler, env_check_handler};
use serde_json::json;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/env-check", get(env_check_handler))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback(spa::spa_fallback)
        .layer(TraceLayer::new_for_http())
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
