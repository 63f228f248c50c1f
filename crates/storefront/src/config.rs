//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TAMALES_STORAGE_DIR` - Directory where the durable key-value store
//!   keeps its records
//!
//! ## Optional
//! - none currently

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory backing the key-value store (profile records live here)
    pub storage_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir = required_env("TAMALES_STORAGE_DIR")?;
        if storage_dir.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "TAMALES_STORAGE_DIR".to_owned(),
                "must not be blank".to_owned(),
            ));
        }

        Ok(Self {
            storage_dir: PathBuf::from(storage_dir),
        })
    }
}

/// Read a required environment variable.
fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_owned()))
}
