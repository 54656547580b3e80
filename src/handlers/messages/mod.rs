//! Message handlers module
//!
//! Handles incoming text messages in private chats

use teloxide::types::Message;
use tracing::debug;

use crate::handlers::router::{Event, Router};
use crate::utils::errors::{GptBuddyError, Result};

/// Handle incoming text messages
pub async fn handle_message(router: &Router, msg: Message) -> Result<()> {
    let user = msg
        .from
        .as_ref()
        .ok_or_else(|| GptBuddyError::InvalidInput("No user in message".to_string()))?;
    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    if !msg.chat.is_private() {
        debug!(user_id = user_id, chat_id = ?chat_id, "Ignoring message outside a private chat");
        return Ok(());
    }

    let Some(text) = msg.text() else {
        debug!(user_id = user_id, "Ignoring non-text message");
        return Ok(());
    };

    // Unknown commands are not free text
    if text.starts_with('/') {
        debug!(user_id = user_id, "Ignoring unknown command");
        return Ok(());
    }

    router.dispatch(Event::text(user_id, chat_id, text)).await
}
