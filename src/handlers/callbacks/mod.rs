//! Callback query handlers module
//!
//! Turns inline keyboard presses into router events

use teloxide::{prelude::*, types::CallbackQuery};
use tracing::{debug, warn};

use crate::handlers::router::{Event, Router};
use crate::utils::errors::Result;

/// Main callback query dispatcher
pub async fn handle_callback_query(bot: Bot, query: CallbackQuery, router: &Router) -> Result<()> {
    let user_id = query.from.id.0 as i64;

    // Answer the callback query first to remove loading state
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, user_id = user_id, "Failed to answer callback query");
    }

    let Some(data) = query.data else {
        debug!(user_id = user_id, "Callback query without data");
        return Ok(());
    };

    let (chat_id, origin) = match &query.message {
        Some(message) => (message.chat().id, Some(message.id())),
        None => (ChatId(user_id), None),
    };

    debug!(user_id = user_id, callback_data = %data, "Routing callback");
    router.dispatch(Event::button(user_id, chat_id, origin, data)).await
}
