//! Database configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TANGELO_DATABASE_URL` - `SQLite` connection string (e.g.
//!   `sqlite://tangelo.db` or `sqlite::memory:`)
//!
//! ## Optional
//! - `TANGELO_MAX_CONNECTIONS` - Pool size (default: 10)

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Database connection configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL (may embed credentials for remote stores)
    pub url: SecretString,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `TANGELO_DATABASE_URL` is
    /// unset, or `ConfigError::InvalidEnvVar` if `TANGELO_MAX_CONNECTIONS`
    /// is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let url = std::env::var("TANGELO_DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("TANGELO_DATABASE_URL".to_owned()))?;

        let max_connections = match std::env::var("TANGELO_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().ok().filter(|&n| n > 0).ok_or_else(|| {
                ConfigError::InvalidEnvVar("TANGELO_MAX_CONNECTIONS".to_owned(), raw)
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            url: SecretString::from(url),
            max_connections,
        })
    }

    /// Configuration for an in-memory database, used by tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: SecretString::from("sqlite::memory:"),
            max_connections: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    #![allow(unsafe_code)] // env::set_var in tests

    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_in_memory() {
        let config = DatabaseConfig::in_memory();
        assert_eq!(config.url.expose_secret(), "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
    }

    // Single test so the env-var juggling can't race with itself.
    #[test]
    fn test_from_env() {
        unsafe {
            std::env::remove_var("TANGELO_DATABASE_URL");
            std::env::remove_var("TANGELO_MAX_CONNECTIONS");
        }
        assert!(matches!(
            DatabaseConfig::from_env(),
            Err(ConfigError::MissingEnvVar(_))
        ));

        unsafe {
            std::env::set_var("TANGELO_DATABASE_URL", "sqlite://test.db");
        }
        let config = DatabaseConfig::from_env().unwrap();
        assert_eq!(config.url.expose_secret(), "sqlite://test.db");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);

        unsafe {
            std::env::set_var("TANGELO_MAX_CONNECTIONS", "4");
        }
        let config = DatabaseConfig::from_env().unwrap();
        assert_eq!(config.max_connections, 4);

        unsafe {
            std::env::set_var("TANGELO_MAX_CONNECTIONS", "zero");
        }
        assert!(matches!(
            DatabaseConfig::from_env(),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));

        unsafe {
            std::env::remove_var("TANGELO_DATABASE_URL");
            std::env::remove_var("TANGELO_MAX_CONNECTIONS");
        }
    }
}
