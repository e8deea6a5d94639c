//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Connection string for the store holding the catalog, medication and
    /// interaction collections.
    pub database_url: String,
    pub log_level: Level,
    pub db_max_connections: u32,
    pub run_migrations: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // --- Server and Database Settings ---
        let bind_address_str = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let database_url =
            lookup("DATABASE_URL").ok_or_else(|| ConfigError::MissingVar("DATABASE_URL".to_string()))?;

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().map_err(|e| {
                ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string(), e.to_string())
            })?,
            None => 5,
        };

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "RUN_MIGRATIONS".to_string(),
                    format!("'{}' is not a boolean", raw),
                )
            })?,
            None => false,
        };

        // --- Logging ---
        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            database_url,
            log_level,
            db_max_connections,
            run_migrations,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/dfi")]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.db_max_connections, 5);
        assert!(!config.run_migrations);
    }

    #[test]
    fn database_url_is_required() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ref v) if v == "DATABASE_URL"));
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/dfi"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("RUST_LOG", "debug"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("RUN_MIGRATIONS", "true"),
        ])
        .unwrap();
        assert_eq!(config.bind_address.port(), 9000);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.db_max_connections, 12);
        assert!(config.run_migrations);
    }

    #[test]
    fn rejects_bad_values() {
        let err = load(&[("DATABASE_URL", "x"), ("BIND_ADDRESS", "nope")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v, _) if v == "BIND_ADDRESS"));

        let err = load(&[("DATABASE_URL", "x"), ("RUN_MIGRATIONS", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v, _) if v == "RUN_MIGRATIONS"));

        let err = load(&[("DATABASE_URL", "x"), ("RUST_LOG", "loud")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v, _) if v == "RUST_LOG"));
    }
}
