//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use super::settings::{BOT_TOKEN_ENV, GATEWAY_TOKEN_ENV};
use crate::utils::errors::{GptBuddyError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_openai_config(&settings.openai)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(GptBuddyError::Config(format!(
            "Bot token is required (set {})",
            BOT_TOKEN_ENV
        )));
    }

    Ok(())
}

/// Validate completion gateway configuration
fn validate_openai_config(config: &super::OpenAiConfig) -> Result<()> {
    if config.api_key.trim().is_empty() {
        return Err(GptBuddyError::Config(format!(
            "Completion gateway credential is required (set {})",
            GATEWAY_TOKEN_ENV
        )));
    }

    if reqwest::Url::parse(&config.api_url).is_err() {
        return Err(GptBuddyError::Config(format!(
            "Invalid completion API URL: {}",
            config.api_url
        )));
    }

    if config.model.is_empty() {
        return Err(GptBuddyError::Config(
            "Completion model is required".to_string()
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(GptBuddyError::Config(
            "Completion timeout must be greater than 0".to_string()
        ));
    }

    if config.reply_language.as_deref().is_some_and(|language| language.trim().is_empty()) {
        return Err(GptBuddyError::Config(
            "Reply language must not be blank when set".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(GptBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(GptBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_some() && config.file_prefix.is_empty() {
        return Err(GptBuddyError::Config(
            "Log file prefix is required when a log directory is set".to_string()
        ));
    }

    Ok(())
}
