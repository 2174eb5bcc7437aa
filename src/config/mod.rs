use std::env;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid SERVER_PORT '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// True unless `APP_ENV=production`.
    pub is_dev: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("SERVER_HOST").ok(),
            env::var("SERVER_PORT").ok(),
            env::var("APP_ENV").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        app_env: Option<String>,
    ) -> Result<Self, ConfigError> {
        let server_port = match port {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        Ok(Config {
            server_host: host.unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port,
            is_dev: app_env.as_deref() != Some("production"),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
