//! Error handling for GptBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use std::fmt;
use thiserror::Error;

/// Main error type for GptBuddy application
#[derive(Error, Debug)]
pub enum GptBuddyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Completion gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Completion gateway failure
///
/// The kind is kept for logging only; every kind is shown to the user as the
/// same "temporarily unavailable" message.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct GatewayError {
    pub kind: GatewayErrorKind,
    pub message: String,
}

/// Classification of gateway failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// Connection failures and timeouts
    Network,
    /// HTTP 429
    RateLimit,
    /// HTTP 5xx
    Server,
    /// HTTP 401 / 403
    Auth,
    /// Any other rejected request
    InvalidRequest,
    /// Body could not be decoded or did not follow the expected format
    InvalidResponse,
    /// The model returned no text
    EmptyReply,
}

impl GatewayError {
    pub fn new(kind: GatewayErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Network, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::InvalidResponse, message)
    }

    pub fn empty_reply() -> Self {
        Self::new(GatewayErrorKind::EmptyReply, "completion contained no text")
    }

    /// Map an HTTP status returned by the endpoint to a gateway error
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            429 => GatewayErrorKind::RateLimit,
            401 | 403 => GatewayErrorKind::Auth,
            500..=599 => GatewayErrorKind::Server,
            _ => GatewayErrorKind::InvalidRequest,
        };
        Self::new(kind, format!("HTTP {}: {}", status, body))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::invalid_response(error.to_string())
        } else if let Some(status) = error.status() {
            Self::from_status(status.as_u16(), &error.to_string())
        } else {
            Self::network(error.to_string())
        }
    }
}

impl fmt::Display for GatewayErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GatewayErrorKind::Network => "network",
            GatewayErrorKind::RateLimit => "rate_limit",
            GatewayErrorKind::Server => "server",
            GatewayErrorKind::Auth => "auth",
            GatewayErrorKind::InvalidRequest => "invalid_request",
            GatewayErrorKind::InvalidResponse => "invalid_response",
            GatewayErrorKind::EmptyReply => "empty_reply",
        };
        f.write_str(name)
    }
}

/// Result type alias for GptBuddy operations
pub type Result<T> = std::result::Result<T, GptBuddyError>;

/// Result type alias for completion gateway operations
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

impl GptBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            GptBuddyError::Config(_) => false,
            GptBuddyError::ConfigSource(_) => false,
            GptBuddyError::Telegram(_) => true,
            GptBuddyError::Gateway(_) => true,
            GptBuddyError::Http(_) => true,
            GptBuddyError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GptBuddyError::Config(_) => ErrorSeverity::Critical,
            GptBuddyError::ConfigSource(_) => ErrorSeverity::Critical,
            GptBuddyError::Gateway(_) => ErrorSeverity::Warning,
            GptBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
