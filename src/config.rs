// src/config.rs
use std::{env, fmt, path::PathBuf, time::Duration};

use thiserror::Error;

pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-2.5-flash:generateContent";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("GEMINI_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub api_url: String,
    pub request_timeout: Duration,
    pub static_dir: PathBuf,
    pub environment: String,
    pub on_render: bool,
}

// Never print the key itself, only whether it is there.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .field("static_dir", &self.static_dir)
            .field("environment", &self.environment)
            .field("on_render", &self.on_render)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_key: None,
            api_url: DEFAULT_GEMINI_API_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            static_dir: PathBuf::from("build"),
            environment: "development".to_string(),
            on_render: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let request_timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => defaults.request_timeout,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            api_key: lookup("GOOGLE_API_KEY").filter(|key| !key.is_empty()),
            api_url: lookup("GEMINI_API_URL").unwrap_or(defaults.api_url),
            request_timeout,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            on_render: lookup("RENDER").is_some(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn api_key_len(&self) -> usize {
        self.api_key.as_deref().map_or(0, str::len)
    }
}
