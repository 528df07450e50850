use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

pub const CONFIG_VERSION: &str = "v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize, TS, PartialEq)]
pub struct Config {
    pub config_version: String,
    /// Delay before the assistant's reply is delivered.
    #[serde(default = "default_response_delay_ms")]
    #[ts(type = "number")]
    pub response_delay_ms: u64,
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default = "default_true")]
    pub open_browser: bool,
    /// Conversations idle this long are evicted together with their preview runs.
    #[serde(default = "default_session_ttl_secs")]
    #[ts(type = "number")]
    pub session_ttl_secs: u64,
}

fn default_response_delay_ms() -> u64 {
    2000
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:8080".to_string(),
        "http://localhost:3001".to_string(),
    ]
}

fn default_session_ttl_secs() -> u64 {
    3600
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_version: CONFIG_VERSION.to_string(),
            response_delay_ms: default_response_delay_ms(),
            cors_allowed_origins: default_cors_allowed_origins(),
            open_browser: true,
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

impl From<String> for Config {
    fn from(raw_config: String) -> Self {
        match serde_json::from_str::<Config>(&raw_config) {
            Ok(config) if config.config_version == CONFIG_VERSION => config,
            Ok(config) => {
                tracing::warn!(
                    "Unknown config version {}, using default",
                    config.config_version
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using default", e);
                Self::default()
            }
        }
    }
}

/// Load the config file, falling back to defaults when it is missing or unreadable.
pub async fn load_config_from_file(config_path: &Path) -> Config {
    match tokio::fs::read_to_string(config_path).await {
        Ok(raw_config) => Config::from(raw_config),
        Err(_) => {
            tracing::info!("No config file found, creating one");
            Config::default()
        }
    }
}

pub async fn save_config_to_file(config: &Config, config_path: &Path) -> Result<(), ConfigError> {
    let raw_config = serde_json::to_string_pretty(config)?;
    tokio::fs::write(config_path, raw_config).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let config = Config::default();
        assert_eq!(config.response_delay(), Duration::from_millis(2000));
        assert_eq!(config.cors_allowed_origins.len(), 2);
        assert!(config.open_browser);
        assert_eq!(config.session_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from(r#"{"config_version":"v1","response_delay_ms":500}"#.to_string());
        assert_eq!(config.response_delay_ms, 500);
        assert_eq!(config.cors_allowed_origins, default_cors_allowed_origins());
        assert_eq!(config.session_ttl_secs, default_session_ttl_secs());
    }

    #[test]
    fn test_corrupt_or_foreign_config_uses_default() {
        assert_eq!(Config::from("not json".to_string()), Config::default());
        assert_eq!(
            Config::from(r#"{"config_version":"v99"}"#.to_string()),
            Config::default()
        );
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            response_delay_ms: 10,
            open_browser: false,
            ..Config::default()
        };
        save_config_to_file(&config, &path).await.unwrap();

        assert_eq!(load_config_from_file(&path).await, config);
    }

    #[tokio::test]
    async fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from_file(&dir.path().join("absent.json")).await;
        assert_eq!(config, Config::default());
    }
}
