use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, EnvCheckResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = Uuid::new_v4();
    relay(state, payload)
        .instrument(info_span!("chat", %request_id))
        .await
}

async fn relay(
    state: SharedState,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    info!("received /api/chat request");

    // A body that parses badly is reported the same way as a missing message;
    // one that could not be read at all (e.g. over the size limit) keeps its status.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection @ JsonRejection::BytesRejection(_)) => {
            warn!(%rejection, "could not read chat request body");
            return Err(AppError::BodyRejected {
                status: rejection.status(),
                message: rejection.body_text(),
            });
        }
        Err(rejection) => {
            warn!(%rejection, "could not read chat request body");
            return Err(AppError::MissingMessage);
        }
    };
    debug!(?payload, "request body");

    let message = payload.message().ok_or(AppError::MissingMessage)?;
    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(AppError::MissingApiKey)?;

    info!(user_message = message, "sending message to Gemini API");
    let reply = state.gemini.generate(api_key, &state.prompt, message).await?;
    info!(reply = %reply, "reply ready");

    Ok(Json(ChatResponse { reply }))
}

// Reports whether the key is set without revealing it.
pub async fn env_check_handler(State(state): State<SharedState>) -> Json<EnvCheckResponse> {
    Json(EnvCheckResponse {
        api_key_configured: state.config.has_api_key(),
        api_key_length: state.config.api_key_len(),
        environment: state.config.environment.clone(),
    })
}
