//! Configuration management for taskpilot.
//!
//! Configuration can be set via environment variables:
//! - `SUPABASE_URL` - Required. Supabase project URL for the task store.
//! - `SUPABASE_ANON_KEY` - Required. Anon key for the task store.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL
    pub supabase_url: String,

    /// Supabase anon key
    pub supabase_anon_key: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `SUPABASE_URL` or
    /// `SUPABASE_ANON_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let supabase_url = std::env::var("SUPABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("SUPABASE_URL".to_string()))?;

        let supabase_anon_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("SUPABASE_ANON_KEY".to_string()))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            host,
            port,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(supabase_url: String, supabase_anon_key: String) -> Self {
        Self {
            supabase_url,
            supabase_anon_key,
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}
