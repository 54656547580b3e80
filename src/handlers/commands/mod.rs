//! Command handlers module
//!
//! Turns bot commands into router events. Command parsing itself is done by
//! the dispatcher through [`Command`]'s `BotCommands` derive.

use teloxide::types::Message;
use tracing::debug;

use crate::handlers::router::{Event, Router};
use crate::state::Command;
use crate::utils::errors::{GptBuddyError, Result};
use crate::utils::logging::log_user_action;

/// Main command dispatcher
pub async fn handle_command(router: &Router, msg: Message, cmd: Command) -> Result<()> {
    let user = msg
        .from
        .as_ref()
        .ok_or_else(|| GptBuddyError::InvalidInput("No user in message".to_string()))?;
    let user_id = user.id.0 as i64;

    if !msg.chat.is_private() {
        debug!(user_id = user_id, chat_id = ?msg.chat.id, "Ignoring command outside a private chat");
        return Ok(());
    }

    log_user_action(user_id, "command", Some(&format!("{:?}", cmd).to_lowercase()));
    router.dispatch(Event::command(user_id, msg.chat.id, cmd)).await
}
