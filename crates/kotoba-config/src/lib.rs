use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use self::network::NetworkConfig;
use self::search::SearchConfig;
use self::server::ServerConfig;
use self::upstream::UpstreamConfig;

pub mod network;
pub mod search;
pub mod server;
pub mod upstream;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub server: ServerConfig,
    pub network: NetworkConfig,
    pub upstream: UpstreamConfig,
    pub search: SearchConfig,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            network: NetworkConfig::default(),
            upstream: UpstreamConfig::default(),
            search: SearchConfig::default(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level());

        Config {
            server: ServerConfig::new(),
            network: NetworkConfig::new(),
            upstream: UpstreamConfig::new(),
            search: SearchConfig::new(),
            log_level,
        }
    }

    /// Load a JSON config file on top of the env-derived config.
    ///
    /// Fields the file leaves out keep their env or default value.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let overrides: Value = serde_json::from_reader(reader)?;
        Self::new().merged_with(overrides)
    }

    /// Overlay a partial JSON document on this config
    pub fn merged_with(&self, overrides: Value) -> Result<Self, ConfigError> {
        let mut base = serde_json::to_value(self)?;
        merge_json(&mut base, overrides);
        Ok(serde_json::from_value(base)?)
    }

    /// Env-derived config, with the file layered on top when a path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new()),
        }
    }
}

fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Parse an env var, falling back when unset or malformed
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"search":{"debounceMs":100}}"#).unwrap();
        assert_eq!(config.search.debounce_ms, 100);
        assert_eq!(config.search.max_display_words, 5);
        assert_eq!(config.network.request_timeout_ms, 8000);
        assert_eq!(config.upstream.daum_url, "https://dic.daum.net");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn file_layers_over_env_values() {
        let mut env_config = Config::default();
        env_config.network.request_timeout_ms = 1234;
        env_config.log_level = "debug".to_string();

        let config = env_config
            .merged_with(serde_json::json!({ "search": { "debounceMs": 100 } }))
            .unwrap();
        assert_eq!(config.search.debounce_ms, 100);
        assert_eq!(config.network.request_timeout_ms, 1234);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn file_value_wins_over_env_value() {
        let mut env_config = Config::default();
        env_config.network.request_timeout_ms = 1234;

        let config = env_config
            .merged_with(serde_json::json!({ "network": { "requestTimeoutMs": 50 } }))
            .unwrap();
        assert_eq!(config.network.request_timeout_ms, 50);
        assert_eq!(config.network.user_agent, env_config.network.user_agent);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
