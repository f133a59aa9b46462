use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub bind_addr: String,

    /// Webhook endpoint the notification dispatcher posts to. When unset,
    /// notifications are logged and treated as delivered.
    pub notification_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            notification_webhook_url: std::env::var("NOTIFICATION_WEBHOOK_URL").ok(),
        })
    }
}
