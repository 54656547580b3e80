//! Event router
//!
//! Telegram adapters turn updates into [`Event`]s; the [`Router`] resolves the
//! event against the user's session, runs the matching flow handler and
//! commits the resulting state.

use teloxide::types::{ChatId, MessageId};
use tracing::debug;

use super::flows::{self, FlowContext};
use crate::services::ServiceFactory;
use crate::state::{transition, ButtonTag, Command, SessionStore, Trigger};
use crate::utils::errors::Result;
use crate::utils::logging::{log_ignored_trigger, log_transition};

/// Payload of an incoming event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Command(Command),
    /// Raw callback data
    Button(String),
    Text(String),
}

/// Normalized incoming event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub user_id: i64,
    pub chat_id: ChatId,
    /// Message the tapped button belongs to
    pub origin: Option<MessageId>,
    pub kind: EventKind,
}

impl Event {
    pub fn command(user_id: i64, chat_id: ChatId, command: Command) -> Self {
        Self { user_id, chat_id, origin: None, kind: EventKind::Command(command) }
    }

    pub fn button(user_id: i64, chat_id: ChatId, origin: Option<MessageId>, data: impl Into<String>) -> Self {
        Self { user_id, chat_id, origin, kind: EventKind::Button(data.into()) }
    }

    pub fn text(user_id: i64, chat_id: ChatId, text: impl Into<String>) -> Self {
        Self { user_id, chat_id, origin: None, kind: EventKind::Text(text.into()) }
    }

    /// Reduce the event to a trigger; unknown callback data and blank text yield `None`
    pub fn trigger(&self) -> Option<Trigger> {
        match &self.kind {
            EventKind::Command(command) => Some(Trigger::Command(*command)),
            EventKind::Button(data) => ButtonTag::parse(data).map(Trigger::Button),
            EventKind::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| Trigger::Text(text.to_string()))
            }
        }
    }
}

/// Routes events to flow handlers and owns the session store
#[derive(Clone)]
pub struct Router {
    services: ServiceFactory,
    sessions: SessionStore,
}

impl Router {
    pub fn new(services: ServiceFactory, sessions: SessionStore) -> Self {
        Self { services, sessions }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one event end to end
    pub async fn dispatch(&self, event: Event) -> Result<()> {
        let Some(trigger) = event.trigger() else {
            debug!(user_id = event.user_id, kind = ?event.kind, "Event carries no usable trigger");
            return Ok(());
        };

        let mut session = self.sessions.load(event.user_id).await;
        let from = session.state.to_string();

        let Some(rule) = transition(&session.state, &trigger) else {
            log_ignored_trigger(event.user_id, &from, &trigger.to_string());
            return Ok(());
        };

        let ctx = FlowContext {
            services: &self.services,
            user_id: event.user_id,
            chat_id: event.chat_id,
            origin: event.origin,
            state: &session.state,
        };

        let committed = flows::execute(&ctx, rule).await?;
        match committed {
            Some(next) => {
                session.enter(next);
                let to = session.state.to_string();
                self.sessions.save(session).await;
                log_transition(event.user_id, &from, &to, &trigger.to_string());
            }
            None => {
                debug!(user_id = event.user_id, state = %from, "Transition not committed, state unchanged");
            }
        }

        Ok(())
    }
}
