//! Configuration management for the Highlight Report server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Default generative endpoint (Gemini 1.5 Flash)
pub const DEFAULT_ORACLE_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub oracle: OracleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Working directory for uploaded PDFs and generated reports
    pub upload_dir: PathBuf,
    /// Request body limit for uploads, in bytes
    pub max_upload_bytes: usize,
    /// Minutes an upload and its report are kept; 0 keeps them until restart
    pub retention_minutes: u64,
}

impl StorageConfig {
    /// Retention window, `None` when eviction is off
    pub fn retention(&self) -> Option<chrono::Duration> {
        // Capped at ten years so the conversion cannot overflow
        let minutes = self.retention_minutes.min(10 * 365 * 24 * 60);
        (minutes > 0).then(|| chrono::Duration::minutes(minutes as i64))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    pub endpoint: String,
    /// Sent as `x-goog-api-key`. `None` disables the oracle.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from("uploads"),
                max_upload_bytes: 50 * 1024 * 1024,
                retention_minutes: 60,
            },
            oracle: OracleConfig::default(),
        }
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            endpoint: DEFAULT_ORACLE_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable lookup; unset variables take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Config {
            server: ServerConfig {
                host: non_empty("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_or("SERVER_PORT", non_empty("SERVER_PORT"), defaults.server.port)?,
            },
            storage: StorageConfig {
                upload_dir: non_empty("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.upload_dir),
                max_upload_bytes: parse_or::<usize>("MAX_UPLOAD_MB", non_empty("MAX_UPLOAD_MB"), 50)?
                    .saturating_mul(1024 * 1024),
                retention_minutes: parse_or(
                    "UPLOAD_RETENTION_MINS",
                    non_empty("UPLOAD_RETENTION_MINS"),
                    defaults.storage.retention_minutes,
                )?,
            },
            oracle: OracleConfig {
                endpoint: non_empty("ORACLE_ENDPOINT").unwrap_or(defaults.oracle.endpoint),
                api_key: non_empty("ORACLE_API_KEY"),
                timeout_secs: parse_or(
                    "ORACLE_TIMEOUT_SECS",
                    non_empty("ORACLE_TIMEOUT_SECS"),
                    defaults.oracle.timeout_secs,
                )?,
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.storage.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.storage.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(config.oracle.endpoint, DEFAULT_ORACLE_ENDPOINT);
        assert_eq!(config.oracle.api_key, None);
        assert_eq!(config.oracle.timeout_secs, 10);
        assert_eq!(config.storage.retention(), Some(chrono::Duration::minutes(60)));
    }

    #[test]
    fn test_zero_retention_disables_eviction() {
        let config = Config::from_lookup(lookup(&[("UPLOAD_RETENTION_MINS", "0")])).unwrap();
        assert_eq!(config.storage.retention(), None);

        let config = Config::from_lookup(lookup(&[("UPLOAD_RETENTION_MINS", "15")])).unwrap();
        assert_eq!(config.storage.retention(), Some(chrono::Duration::minutes(15)));
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_PORT", "8080"),
            ("UPLOAD_DIR", "/tmp/reports"),
            ("MAX_UPLOAD_MB", "5"),
            ("ORACLE_API_KEY", "test-key"),
            ("ORACLE_TIMEOUT_SECS", " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.upload_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.storage.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.oracle.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.oracle.timeout_secs, 3);
    }

    #[test]
    fn test_blank_api_key_disables_oracle() {
        let config = Config::from_lookup(lookup(&[("ORACLE_API_KEY", "  ")])).unwrap();
        assert_eq!(config.oracle.api_key, None);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = Config::from_lookup(lookup(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "SERVER_PORT", .. }));
    }
}
