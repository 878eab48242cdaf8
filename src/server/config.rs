use crate::server::error::{config::ConfigError, AppError};

/// Base URL used when `APP_URL` is not set.
pub const DEFAULT_APP_URL: &str = "http://localhost:8080";

pub struct Config {
    pub database_url: String,

    /// Public base URL of the application, advertised as the OpenAPI server.
    pub app_url: String,

    /// Whether the session cookie is marked `Secure` (HTTPS only).
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            session_secure: parse_bool_var("SESSION_SECURE", std::env::var("SESSION_SECURE").ok())?,
        })
    }
}

/// Parses an optional boolean environment variable, defaulting to `false` when unset.
fn parse_bool_var(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
