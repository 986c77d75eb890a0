//! Configuration management for the contact normalizer.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file. Command line flags take
//! precedence over anything loaded here.

use crate::domain::EmailPolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default input for the email linter.
pub const DEFAULT_EMAIL_FILE: &str = "Email.txt";

/// Default input for the phone linter.
pub const DEFAULT_PHONE_FILE: &str = "PhoneNumbers.txt";

/// Default input for the contact row processor.
pub const DEFAULT_CONTACTS_FILE: &str = "Data Cleaning Prompt - Sheet1.csv";

/// Configuration for the contact normalizer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repairs applied to emails before validation (default: repair)
    pub email_policy: EmailPolicy,

    /// Email list read when no file is given
    pub email_file: PathBuf,

    /// Phone list read when no file is given
    pub phone_file: PathBuf,

    /// Contact CSV read when no file is given
    pub contacts_file: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `EMAIL_POLICY`: `repair` or `spacing-only` (default: repair)
    /// - `EMAIL_FILE`: default email list (default: Email.txt)
    /// - `PHONE_FILE`: default phone list (default: PhoneNumbers.txt)
    /// - `CONTACTS_FILE`: default contact CSV
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let email_policy = match env::var("EMAIL_POLICY") {
            Ok(val) => val.parse::<EmailPolicy>().map_err(|e| ConfigError::InvalidValue {
                var: "EMAIL_POLICY".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => defaults.email_policy,
        };

        let email_file = Self::parse_env_path("EMAIL_FILE", defaults.email_file)?;
        let phone_file = Self::parse_env_path("PHONE_FILE", defaults.phone_file)?;
        let contacts_file = Self::parse_env_path("CONTACTS_FILE", defaults.contacts_file)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            email_policy,
            email_file,
            phone_file,
            contacts_file,
            log_level,
        })
    }

    /// Parse an environment variable as a file path with a default value.
    fn parse_env_path(var_name: &str, default: PathBuf) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val)),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            email_policy: EmailPolicy::default(),
            email_file: PathBuf::from(DEFAULT_EMAIL_FILE),
            phone_file: PathBuf::from(DEFAULT_PHONE_FILE),
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            log_level: "warn".to_string(),
        }
    }
}
