// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

use crate::services::gemini::GeminiError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Message is required")]
    MissingMessage,

    #[error("{message}")]
    BodyRejected { status: StatusCode, message: String },

    #[error("GOOGLE_API_KEY is not set")]
    MissingApiKey,

    #[error(transparent)]
    Upstream(#[from] GeminiError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingMessage => StatusCode::BAD_REQUEST,
            AppError::BodyRejected { status, .. } => *status,
            AppError::MissingApiKey | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(self) -> Value {
        match self {
            AppError::MissingMessage => json!({ "error": "Message is required" }),
            AppError::BodyRejected { message, .. } => json!({ "error": message }),
            AppError::MissingApiKey => json!({
                "error": "Server configuration error",
                "details": "GOOGLE_API_KEY is not set",
            }),
            AppError::Upstream(GeminiError::Transport(e)) => json!({
                "error": "Failed to connect to Gemini API",
                "details": e.to_string(),
            }),
            AppError::Upstream(GeminiError::Status { body, .. }) => json!({
                "error": "Failed to connect to Gemini API",
                "details": body,
            }),
            AppError::Upstream(GeminiError::EmptyReply { raw, .. }) => json!({
                "error": "Gemini API response invalid or empty",
                "fullResponse": raw,
            }),
        }
    }

    // Upstream failures are already logged by the Gemini client.
    fn logged_here(&self) -> bool {
        self.status().is_server_error() && !matches!(self, AppError::Upstream(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.logged_here() {
            error!("{}", self);
        }
        (status, Json(self.body())).into_response()
    }
}
