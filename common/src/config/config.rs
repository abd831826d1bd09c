use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::err::CResult;
use crate::err::engine_error::SqliteError;

/// Engine-wide knobs. Everything has a sensible default so `Connection::open`
/// works without any configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Number of prepared-statement cache slots, clamped to [0, 16384].
    #[serde(default = "default_statement_cache_size")]
    pub statement_cache_size: usize,

    /// Passed to sqlite3_busy_timeout at open; 0 keeps no busy handler.
    #[serde(default)]
    pub busy_timeout_ms: u32,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_statement_cache_size() -> usize {
    100
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            statement_cache_size: default_statement_cache_size(),
            busy_timeout_ms: 0,
            log: LogConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> CResult<EngineConfig> {
        let mut config: EngineConfig = toml::from_str(text)
            .map_err(|e| SqliteError::Value(format!("config parse error: {e}")))?;
        config.statement_cache_size = config.statement_cache_size.min(16384);
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> CResult<EngineConfig> {
        let text = fs::read_to_string(path.as_ref())
            .map_err(|e| SqliteError::Value(format!("config read error: {e}")))?;
        EngineConfig::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.statement_cache_size, 100);
        assert_eq!(config.busy_timeout_ms, 0);
        assert!(!config.log.debug);
    }

    #[test]
    fn test_from_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            statement_cache_size = 16
            busy_timeout_ms = 250

            [log]
            debug = true
            "#,
        )
        .unwrap();
        assert_eq!(config.statement_cache_size, 16);
        assert_eq!(config.busy_timeout_ms, 250);
        assert!(config.log.debug);
    }

    #[test]
    fn test_cache_size_is_clamped() {
        let config = EngineConfig::from_toml_str("statement_cache_size = 1000000").unwrap();
        assert_eq!(config.statement_cache_size, 16384);
    }

    #[test]
    fn test_bad_toml_is_a_value_error() {
        let err = EngineConfig::from_toml_str("statement_cache_size = \"many\"").unwrap_err();
        assert!(matches!(err, SqliteError::Value(_)));
    }
}
