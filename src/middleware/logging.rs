//! Logging middleware
//!
//! Records every incoming update before routing and measures how long each
//! handler takes. Message text is never logged.

use std::time::{Duration, Instant};

use teloxide::types::{Update, UpdateKind};
use tracing::{debug, info, warn, Span};

/// Handlers slower than this are reported at warn level
const DEFAULT_SLOW_THRESHOLD: Duration = Duration::from_secs(5);

/// Logging middleware for bot interactions
#[derive(Debug, Clone)]
pub struct UpdateLogger {
    log_interactions: bool,
    slow_threshold: Duration,
}

impl UpdateLogger {
    /// Create a new UpdateLogger instance
    pub fn new(log_interactions: bool, slow_threshold: Duration) -> Self {
        Self {
            log_interactions,
            slow_threshold,
        }
    }

    /// Short name of the update type
    pub fn update_type(update: &Update) -> &'static str {
        match &update.kind {
            UpdateKind::Message(message) if message.text().is_some() => "text_message",
            UpdateKind::Message(_) => "message",
            UpdateKind::EditedMessage(_) => "edited_message",
            UpdateKind::CallbackQuery(_) => "callback_query",
            UpdateKind::MyChatMember(_) => "my_chat_member",
            _ => "other",
        }
    }

    /// Log incoming update
    pub fn log_update(&self, update: &Update) {
        if !self.log_interactions {
            return;
        }

        let user_id = update.from().map(|user| user.id.0);
        let chat_id = update.chat().map(|chat| chat.id.0);

        match &update.kind {
            UpdateKind::CallbackQuery(query) => {
                info!(
                    update_id = update.id.0,
                    user_id = user_id,
                    callback_data = query.data.as_deref().unwrap_or("none"),
                    "Callback query received"
                );
            }
            _ => {
                info!(
                    update_id = update.id.0,
                    user_id = user_id,
                    chat_id = chat_id,
                    update_type = Self::update_type(update),
                    "Update received"
                );
            }
        }
    }

    /// Start timing a handler
    pub fn track(&self, operation: &'static str) -> PerformanceTracker {
        PerformanceTracker::new(operation, self.slow_threshold)
    }
}

impl Default for UpdateLogger {
    fn default() -> Self {
        Self::new(true, DEFAULT_SLOW_THRESHOLD)
    }
}

/// Performance tracker for measuring handler duration
pub struct PerformanceTracker {
    operation: &'static str,
    start_time: Instant,
    slow_threshold: Duration,
    _span: Span,
}

impl PerformanceTracker {
    fn new(operation: &'static str, slow_threshold: Duration) -> Self {
        Self {
            operation,
            start_time: Instant::now(),
            slow_threshold,
            _span: tracing::debug_span!("handler", operation = operation),
        }
    }

    /// Complete the tracking and log the result
    pub fn complete(self, success: bool) -> Duration {
        let duration = self.start_time.elapsed();
        let duration_ms = duration.as_millis();

        if !success {
            warn!(operation = self.operation, duration_ms = duration_ms, "Handler failed");
        } else if duration > self.slow_threshold {
            warn!(operation = self.operation, duration_ms = duration_ms, "Slow handler detected");
        } else {
            debug!(operation = self.operation, duration_ms = duration_ms, "Handler completed");
        }

        duration
    }
}
