//! Services module
//!
//! This module contains the external collaborators of the flow engine: the
//! completion gateway and the presentation layer.

pub mod gateway;
pub mod openai;
pub mod presenter;

// Re-export commonly used services
pub use gateway::{CompletionGateway, CompletionRequest};
pub use openai::OpenAiService;
pub use presenter::{Button, Keyboard, Presenter, Reply, TelegramPresenter, MAX_MESSAGE_CHARS};

use std::sync::Arc;

use teloxide::Bot;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and sharing the collaborators
#[derive(Clone)]
pub struct ServiceFactory {
    pub gateway: Arc<dyn CompletionGateway>,
    pub presenter: Arc<dyn Presenter>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory backed by OpenAI and Telegram
    pub fn new(bot: Bot, settings: &Settings) -> Result<Self> {
        let gateway = OpenAiService::new(&settings.openai)?;
        let presenter = TelegramPresenter::new(bot);

        Ok(Self::with_collaborators(Arc::new(gateway), Arc::new(presenter)))
    }

    /// Create a ServiceFactory from existing collaborators
    pub fn with_collaborators(gateway: Arc<dyn CompletionGateway>, presenter: Arc<dyn Presenter>) -> Self {
        Self { gateway, presenter }
    }
}
