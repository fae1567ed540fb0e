//! Application configuration, read once at startup.

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "recipes.db";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default Anthropic model when `ANTHROPIC_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Settings for the AI recommendation provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    /// Anthropic API key. `None` selects the fallback strategy.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database path (or `:memory:`).
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `DATABASE_URL`: SQLite file (default: "recipes.db")
    /// - `BIND_ADDR`: listen address (default: "0.0.0.0:3000")
    /// - `ANTHROPIC_API_KEY`: enables AI recommendations
    /// - `ANTHROPIC_MODEL`: model name (default: "claude-3-5-sonnet-latest")
    /// - `ANTHROPIC_BASE_URL`: API base URL (default: "https://api.anthropic.com")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url =
            non_empty("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_raw = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "BIND_ADDR".to_string(),
                value: bind_raw.clone(),
            })?;

        let ai = AiConfig {
            api_key: non_empty("ANTHROPIC_API_KEY").map(|k| k.trim().to_string()),
            model: non_empty("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        Ok(Self {
            database_url,
            bind_addr,
            ai,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.ai, AiConfig::default());
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = config_from(&[("ANTHROPIC_API_KEY", "  ")]).unwrap();
        assert_eq!(config.ai.api_key, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "/tmp/x.db"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANTHROPIC_MODEL", "claude-test"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "/tmp/x.db");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.ai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.ai.model, "claude-test");
        assert_eq!(config.ai.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = config_from(&[("BIND_ADDR", "not-an-addr")]).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
