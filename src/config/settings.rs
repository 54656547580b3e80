//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable holding the Telegram bot token
pub const BOT_TOKEN_ENV: &str = "TG_BOT_TOKEN";

/// Environment variable holding the completion gateway credential
pub const GATEWAY_TOKEN_ENV: &str = "CHATGPT_TOKEN";

/// Prefix of `GPTBUDDY__SECTION__KEY` overrides
pub const ENV_PREFIX: &str = "GPTBUDDY";

const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub bot: BotConfig,
    pub openai: OpenAiConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    pub token: String,
}

/// Completion gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    /// Language every answer should be written in, e.g. "Russian"
    pub reply_language: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily-rolling log files; stdout only when unset
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            timeout_seconds: 60,
            reply_language: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "gptbuddy.log".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Sources in increasing priority: `config.toml` (optional),
    /// `GPTBUDDY__SECTION__KEY` variables, then `TG_BOT_TOKEN` and
    /// `CHATGPT_TOKEN`.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Same layering as [`Settings::new`] with an explicit, optional config file
    pub fn load(config_file: &Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(config_file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_override_option("bot.token", std::env::var(BOT_TOKEN_ENV).ok())?
            .set_override_option("openai.api_key", std::env::var(GATEWAY_TOKEN_ENV).ok())?
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from a single configuration file
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::GptBuddyError> {
        super::validation::validate_settings(self)
    }
}
