use std::env;
use std::path::PathBuf;

use axum::http::HeaderValue;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_DIR: &str = "../frontend/dist";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Runtime settings, read from the process environment (and `.env` via dotenvy).
///
/// Nothing is mandatory: an empty environment yields a development server on
/// `127.0.0.1:3000` serving the trunk output of the frontend crate.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub allowed_origin: Option<HeaderValue>,
    pub environment: String,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let allowed_origin = match non_empty("ALLOWED_ORIGIN") {
            Some(raw) => Some(
                HeaderValue::from_str(raw.trim()).map_err(|_| ConfigError::InvalidOrigin(raw))?,
            ),
            None => None,
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            frontend_dir: non_empty("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR)),
            allowed_origin,
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEFAULT_ENVIRONMENT
    }
}
