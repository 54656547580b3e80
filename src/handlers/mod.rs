//! Bot handlers module
//!
//! This module contains the Telegram adapters, the event router and the flow
//! handlers:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for free text

pub mod callbacks;
pub mod commands;
pub mod flows;
pub mod messages;
pub mod router;

// Re-export commonly used handler functions
pub use callbacks::handle_callback_query;
pub use commands::handle_command;
pub use messages::handle_message;
pub use router::{Event, EventKind, Router};
