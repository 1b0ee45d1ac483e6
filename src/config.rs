//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::domain::{EventKind, IdentityEncoding};
use crate::ingest::TriggerTable;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// How receipt ids and hashes are rendered into records
    pub identity_encoding: IdentityEncoding,

    /// Method name bindings, defaults plus overrides
    pub triggers: TriggerTable,

    /// Environment (development, production)
    pub environment: String,

    /// Receipts to replay, one JSON object per line (stdin when unset)
    pub receipts_path: Option<PathBuf>,

    /// Where records are written (stdout when unset)
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let identity_encoding = match env::var("IDENTITY_ENCODING") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("IDENTITY_ENCODING"))?,
            Err(_) => IdentityEncoding::default(),
        };

        let triggers = match env::var("METHOD_TRIGGERS") {
            Ok(value) => parse_triggers(&value)?,
            Err(_) => TriggerTable::default(),
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let receipts_path = env::var("RECEIPTS_PATH").ok().map(PathBuf::from);
        let output_path = env::var("OUTPUT_PATH").ok().map(PathBuf::from);

        Ok(Self {
            identity_encoding,
            triggers,
            environment,
            receipts_path,
            output_path,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identity_encoding: IdentityEncoding::default(),
            triggers: TriggerTable::default(),
            environment: "development".to_string(),
            receipts_path: None,
            output_path: None,
        }
    }
}

/// Parse `kind=method` pairs, comma separated, on top of the defaults
pub fn parse_triggers(value: &str) -> Result<TriggerTable, ConfigError> {
    let mut table = TriggerTable::default();

    for pair in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (kind, method) = pair
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidTrigger(pair.to_string()))?;

        let kind = EventKind::from_name(kind.trim())
            .ok_or_else(|| ConfigError::InvalidTrigger(pair.to_string()))?;

        let method = method.trim();
        if method.is_empty() {
            return Err(ConfigError::InvalidTrigger(pair.to_string()));
        }

        table = table.with_trigger(kind, method);
    }

    Ok(table)
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),

    #[error("Invalid trigger override (expected kind=method): {0}")]
    InvalidTrigger(String),
}
