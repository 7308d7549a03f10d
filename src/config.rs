//! Configuration management for Genie
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{GenieError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Models offered when the catalog cannot be fetched
pub const FALLBACK_MODELS: [&str; 4] = ["gpt-4", "gpt-3.5-turbo", "claude-3", "llama-2"];

/// Main configuration structure for Genie
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Inference API connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Chat behavior settings
    #[serde(default)]
    pub chat: ChatConfig,
    /// Conversation list settings
    #[serde(default)]
    pub sessions: SessionsConfig,
}

/// Inference API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL that serves `/models` and `/model_response`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall request timeout (seconds)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

fn default_user_agent() -> String {
    format!("genie/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

/// Chat configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Model to prefer over the first catalog entry when it is offered
    #[serde(default)]
    pub default_model: Option<String>,

    /// Catalog used when `/models` cannot be fetched
    #[serde(default = "default_fallback_models")]
    pub fallback_models: Vec<String>,
}

fn default_fallback_models() -> Vec<String> {
    FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_model: None,
            fallback_models: default_fallback_models(),
        }
    }
}

/// Conversation list configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionsConfig {
    /// YAML or JSON file with conversation summaries; demo data when unset
    #[serde(default)]
    pub fixtures_path: Option<String>,
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GenieError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| GenieError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("GENIE_API_BASE") {
            tracing::debug!(base_url = %base_url, "Env override: GENIE_API_BASE");
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("GENIE_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.api.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid GENIE_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(model) = std::env::var("GENIE_MODEL") {
            if !model.trim().is_empty() {
                self.chat.default_model = Some(model);
            }
        }

        if let Ok(fixtures) = std::env::var("GENIE_SESSIONS_FILE") {
            self.sessions.fixtures_path = Some(fixtures);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Some(base_url) = &cli.api_base {
            self.api.base_url = base_url.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an absolute http(s) URL, the
    /// timeout is zero, or the fallback catalog is empty
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(GenieError::Config("api.base_url cannot be empty".to_string()).into());
        }

        let parsed = url::Url::parse(&self.api.base_url).map_err(|e| {
            GenieError::Config(format!(
                "Invalid api.base_url '{}': {}",
                self.api.base_url, e
            ))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GenieError::Config(format!(
                "api.base_url must use http or https, got: {}",
                parsed.scheme()
            ))
            .into());
        }

        if self.api.timeout_seconds == 0 {
            return Err(GenieError::Config(
                "api.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.chat.fallback_models.is_empty() {
            return Err(GenieError::Config(
                "chat.fallback_models must contain at least one model".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
