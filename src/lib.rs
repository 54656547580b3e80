//! GptBuddy Telegram Bot
//!
//! A Telegram bot that puts a language model behind a handful of menu-driven
//! conversation flows: random facts, open ChatGPT questions, conversations
//! with famous personas and a quiz. This library provides the flow engine,
//! the completion gateway and the Telegram presentation layer.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{GptBuddyError, Result};

// Re-export main components for easy access
pub use handlers::{Event, Router};
pub use services::ServiceFactory;
pub use state::{FlowState, SessionStore, UserSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
