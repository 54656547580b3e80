//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the GptBuddy application.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{GatewayError, GptBuddyError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held by
/// `main` for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| GptBuddyError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a committed flow transition
pub fn log_transition(user_id: i64, from: &str, to: &str, trigger: &str) {
    info!(
        user_id = user_id,
        from = from,
        to = to,
        trigger = trigger,
        "Flow transition"
    );
}

/// Log a trigger that has no rule for the current state
pub fn log_ignored_trigger(user_id: i64, state: &str, trigger: &str) {
    debug!(
        user_id = user_id,
        state = state,
        trigger = trigger,
        "Trigger ignored for current state"
    );
}

/// Log gateway failures with context
pub fn log_gateway_failure(user_id: i64, flow: &str, error: &GatewayError) {
    warn!(
        user_id = user_id,
        flow = flow,
        kind = %error.kind,
        error = %error.message,
        "Completion gateway failed"
    );
}
