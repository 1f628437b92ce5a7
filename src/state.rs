// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::{GeminiClient, GeminiError};
use crate::services::restaurant::RESTAURANT;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub prompt: Arc<str>,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, GeminiError> {
        Self::with_prompt(config, RESTAURANT.render_prompt())
    }

    pub fn with_prompt(config: Config, prompt: impl Into<Arc<str>>) -> Result<Self, GeminiError> {
        let gemini = GeminiClient::new(config.api_url.clone(), config.request_timeout)?;
        Ok(Self {
            config,
            prompt: prompt.into(),
            gemini,
        })
    }
}
