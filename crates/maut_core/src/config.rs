//! Runtime settings for binaries embedding the toll registry.
//!
//! # Responsibility
//! - Collect database and logging settings from the environment.
//! - Provide build-mode dependent defaults.
//!
//! # Invariants
//! - The registry never reads configuration; it only receives a connection.
//! - Unset or blank variables fall back to defaults instead of failing.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "MAUT_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "MAUT_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "MAUT_LOG_DIR";

/// Settings used to open a store and start logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// SQLite database file. `None` means no store is configured.
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    /// One of `trace|debug|info|warn|error`.
    #[serde(default = "default_level")]
    pub log_level: String,

    /// Absolute directory for rolling log files. `None` disables file logs.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_level() -> String {
    default_log_level().to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_level(),
            log_dir: None,
        }
    }
}

impl RegistryConfig {
    /// Reads `MAUT_DB_PATH`, `MAUT_LOG_LEVEL` and `MAUT_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        Self {
            db_path: value(DB_PATH_ENV).map(PathBuf::from),
            log_level: value(LOG_LEVEL_ENV).unwrap_or_else(default_level),
            log_dir: value(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RegistryConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn missing_values_use_defaults() {
        let config = RegistryConfig::from_lookup(|_| None);
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn values_are_trimmed_and_blank_values_ignored() {
        let env = HashMap::from([
            (DB_PATH_ENV, " /var/lib/maut/maut.db "),
            (LOG_LEVEL_ENV, "   "),
            (LOG_DIR_ENV, "/var/log/maut"),
        ]);
        let config = RegistryConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.db_path, Some(PathBuf::from("/var/lib/maut/maut.db")));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/maut")));
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"db_path":"/tmp/maut.db"}"#).unwrap();
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/maut.db")));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }
}
