//! Configuration management for the Nieuwe Vloer backend.
//!
//! This module handles loading and validating configuration from environment variables.
//! The store connection string is optional: the original deployment starts without a
//! database and degrades to serving the read-only endpoints, so this one does too.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default logical database name when `DATABASE_NAME` is unset.
pub const DEFAULT_DATABASE_NAME: &str = "nieuwevloer";

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration for the Nieuwe Vloer backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection string, if configured
    pub database_url: Option<String>,

    /// Logical database name (default: "nieuwevloer")
    pub database_name: String,

    /// HTTP listen port (default: 8000)
    pub port: u16,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DATABASE_URL`: Document store connection string
    /// - `DATABASE_NAME`: Logical database name (default: "nieuwevloer")
    /// - `PORT`: HTTP listen port (default: 8000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let database_url = env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty());

        let database_name =
            env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

        let port = Self::parse_env_u16("PORT", DEFAULT_PORT)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            database_url,
            database_name,
            port,
            log_level,
        })
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}
