//! Configuration management
//!
//! Strongly-typed configuration loaded from a TOML file with environment
//! variable overrides. Environment variables use the `VULNWATCH` prefix with
//! double underscore separators, e.g. `VULNWATCH__GITHUB_TOKEN=...`.

pub mod catalog;

pub use catalog::{icon_for_ecosystem, icon_for_severity, team_by_slug, CatalogError};

use serde::{Deserialize, Serialize};

/// One severity catalog entry: a canonical label and its notification icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SeverityConfig {
    pub label: String,
    pub slack_emoji: String,
}

/// One ecosystem catalog entry. Labels are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EcosystemConfig {
    pub label: String,
    pub slack_emoji: String,
}

/// A team that can own projects. Teams have no numeric identity; equality and
/// hashing are by value over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TeamConfig {
    pub name: String,
    pub github_slug: String,
    pub slack_channel: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive, overridden by `RUST_LOG` and by CLI
    /// verbosity flags.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_slack_channel: String,
    pub github_org: String,
    pub github_token: String,
    pub slack_auth_token: String,
    pub disable_slack: bool,
    pub github_endpoint: String,
    pub slack_endpoint: String,
    pub severity: Vec<SeverityConfig>,
    pub ecosystem: Vec<EcosystemConfig>,
    pub team: Vec<TeamConfig>,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_slack_channel: String::new(),
            github_org: String::new(),
            github_token: String::new(),
            slack_auth_token: String::new(),
            disable_slack: false,
            github_endpoint: "https://api.github.com/graphql".to_string(),
            slack_endpoint: "https://slack.com/api".to_string(),
            severity: Vec::new(),
            ecosystem: Vec::new(),
            team: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the given file (or `config/default.toml` when
    /// none is given), then applies `VULNWATCH__*` environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(path) => builder.add_source(config::File::with_name(path)),
            None => builder.add_source(config::File::with_name("config/default").required(false)),
        };

        // Environment variables last (highest priority)
        builder =
            builder.add_source(config::Environment::with_prefix("VULNWATCH").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a scan.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.github_org.is_empty() {
            return Err(ConfigLoadError::Validation(
                "github_org must be set (VULNWATCH__GITHUB_ORG)".to_string(),
            ));
        }
        if self.github_token.is_empty() {
            return Err(ConfigLoadError::Validation(
                "github_token must be set (VULNWATCH__GITHUB_TOKEN)".to_string(),
            ));
        }
        if !self.disable_slack && self.slack_auth_token.is_empty() {
            return Err(ConfigLoadError::Validation(
                "slack_auth_token must be set unless Slack alerts are disabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("configuration validation error: {0}")]
    Validation(String),
}
