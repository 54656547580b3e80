//! Presentation layer
//!
//! Flows render [`Reply`] values through the [`Presenter`] trait. The Telegram
//! implementation sends everything in HTML parse mode; callers escape any
//! text that did not come from the bot itself.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatAction, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode},
};

use crate::state::ButtonTag;
use crate::utils::errors::Result;

/// Telegram's limit on message text, in characters
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Inline button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub tag: ButtonTag,
}

/// Inline keyboard, one `Vec` per row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row holding a single button
    pub fn button(mut self, label: impl Into<String>, tag: ButtonTag) -> Self {
        self.rows.push(vec![Button { label: label.into(), tag }]);
        self
    }

    /// All button tags, row by row
    pub fn tags(&self) -> Vec<ButtonTag> {
        self.rows.iter().flatten().map(|button| button.tag).collect()
    }

    pub fn to_markup(&self) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(self.rows.iter().map(|row| {
            row.iter()
                .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.tag.callback_data()))
                .collect::<Vec<_>>()
        }))
    }
}

/// A message to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Renders replies back to the user
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Send a new message and return its ID
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> Result<MessageId>;

    /// Replace the text and keyboard of an existing message
    async fn edit(&self, chat_id: ChatId, message_id: MessageId, reply: &Reply) -> Result<()>;

    async fn delete(&self, chat_id: ChatId, message_id: MessageId) -> Result<()>;

    /// Show the "typing" chat action
    async fn typing(&self, chat_id: ChatId) -> Result<()>;
}

/// Telegram Bot API presenter
#[derive(Clone)]
pub struct TelegramPresenter {
    bot: Bot,
}

impl TelegramPresenter {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Presenter for TelegramPresenter {
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> Result<MessageId> {
        let mut request = self
            .bot
            .send_message(chat_id, reply.text.clone())
            .parse_mode(ParseMode::Html);
        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(keyboard.to_markup());
        }

        let message = request.await?;
        Ok(message.id)
    }

    async fn edit(&self, chat_id: ChatId, message_id: MessageId, reply: &Reply) -> Result<()> {
        let mut request = self
            .bot
            .edit_message_text(chat_id, message_id, reply.text.clone())
            .parse_mode(ParseMode::Html);
        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(keyboard.to_markup());
        }

        request.await?;
        Ok(())
    }

    async fn delete(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        self.bot.delete_message(chat_id, message_id).await?;
        Ok(())
    }

    async fn typing(&self, chat_id: ChatId) -> Result<()> {
        self.bot.send_chat_action(chat_id, ChatAction::Typing).await?;
        Ok(())
    }
}
